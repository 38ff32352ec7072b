use super::math::{CpuMathBackend, MathBackend};

impl MathBackend for CpuMathBackend {
    fn name(&self) -> &'static str {
        "cpu"
    }

    fn vector_length_squared(&self, v: &[f64; 3]) -> f64 {
        v[0] * v[0] + v[1] * v[1] + v[2] * v[2]
    }

    fn vector_length(&self, v: &[f64; 3]) -> f64 {
        self.vector_length_squared(v).sqrt()
    }

    fn vector_normalize(&self, v: &[f64; 3]) -> [f64; 3] {
        let mag = self.vector_length(v);
        [
            v[0] / mag,
            v[1] / mag,
            v[2] / mag,
        ]
    }

    fn vector_dot(&self, v1: &[f64; 3], v2: &[f64; 3]) -> f64 {
        v1[0] * v2[0] + v1[1] * v2[1] + v1[2] * v2[2]
    }

    fn vector_cosine(&self, v1: &[f64; 3], v2: &[f64; 3]) -> f64 {
        let n1 = self.vector_normalize(v1);
        let n2 = self.vector_normalize(v2);
        self.vector_dot(&n1, &n2)
    }
}
