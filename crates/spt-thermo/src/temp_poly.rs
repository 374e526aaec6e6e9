//! Precomputed functions of temperature shared by every polynomial family.

/// `[T, T², T³, T⁴, 1/T, ln T]` for one temperature.
///
/// Built once per manager update and handed to every species evaluator, so
/// the logarithm and reciprocal are evaluated once per call rather than once
/// per species. Never stored between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempPoly([f64; 6]);

impl TempPoly {
    pub const T: usize = 0;
    pub const T2: usize = 1;
    pub const T3: usize = 2;
    pub const T4: usize = 3;
    pub const INV_T: usize = 4;
    pub const LN_T: usize = 5;

    /// Build the polynomial for temperature `t` [K].
    ///
    /// No validation: a non-positive `t` yields non-finite entries.
    #[inline]
    pub fn new(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        Self([t, t2, t3, t3 * t, 1.0 / t, t.ln()])
    }

    #[inline]
    pub fn t(&self) -> f64 {
        self.0[Self::T]
    }

    #[inline]
    pub fn t2(&self) -> f64 {
        self.0[Self::T2]
    }

    #[inline]
    pub fn t3(&self) -> f64 {
        self.0[Self::T3]
    }

    #[inline]
    pub fn t4(&self) -> f64 {
        self.0[Self::T4]
    }

    #[inline]
    pub fn inv_t(&self) -> f64 {
        self.0[Self::INV_T]
    }

    #[inline]
    pub fn ln_t(&self) -> f64 {
        self.0[Self::LN_T]
    }

    pub fn as_array(&self) -> &[f64; 6] {
        &self.0
    }
}
