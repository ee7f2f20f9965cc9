//! Regression test parameters and comparisons

use quadwarp_core::Sprite;

/// Regression test parameters
///
/// Tracks the state of one regression test: the test name, a running
/// comparison index, and the recorded failures. Comparisons report to
/// stderr as they run; [`RegParams::cleanup`] reports the overall verdict.
pub struct RegParams {
    /// Name of the test (e.g., "warp")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "warp")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values.
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if the values match within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Record a named boolean check.
    pub fn check(&mut self, ok: bool, label: &str) -> bool {
        self.index += 1;
        if !ok {
            let msg = format!(
                "Failure in {}_reg: check '{}' for index {}",
                self.test_name, label, self.index
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
        }
        ok
    }

    /// Compare two sprites pixel-for-pixel.
    ///
    /// # Returns
    ///
    /// `true` if dimensions and every pixel match.
    pub fn compare_sprites(&mut self, expected: &Sprite, actual: &Sprite) -> bool {
        self.index += 1;

        if expected.width() != actual.width() || expected.height() != actual.height() {
            let msg = format!(
                "Failure in {}_reg: sprite comparison for index {} - \
                 dimension mismatch: {}x{} vs {}x{}",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        for y in 0..expected.height() as i32 {
            for x in 0..expected.width() as i32 {
                let e = expected.get_pixel(x, y);
                let a = actual.get_pixel(x, y);
                if e != a {
                    let msg = format!(
                        "Failure in {}_reg: sprite comparison for index {} - \
                         first mismatch at ({}, {}): expected {:?}, actual {:?}",
                        self.test_name, self.index, x, y, e, a
                    );
                    eprintln!("{}", msg);
                    self.failures.push(msg);
                    self.success = false;
                    return false;
                }
            }
        }
        true
    }

    /// Report the accumulated result.
    ///
    /// # Returns
    ///
    /// `true` if every comparison passed.
    pub fn cleanup(&self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg ({} comparisons)", self.test_name, self.index);
        } else {
            eprintln!(
                "FAILURE: {}_reg ({} of {} comparisons failed)",
                self.test_name,
                self.failures.len(),
                self.index
            );
        }
        self.success
    }
}
