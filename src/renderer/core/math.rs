use std::sync::OnceLock;

/// Rutinas en coma flotante que usa `Point3` para magnitud, normalización y
/// producto escalar. Todas trabajan sobre ternas f64 sea cual sea el tipo del punto.
pub trait MathBackend: Send + Sync {
    fn name(&self) -> &'static str;

    fn vector_length_squared(&self, v: &[f64; 3]) -> f64;
    fn vector_length(&self, v: &[f64; 3]) -> f64;

    /// Divide cada componente por la magnitud. Sin comprobar el cero:
    /// con magnitud nula el resultado es NaN/Inf.
    fn vector_normalize(&self, v: &[f64; 3]) -> [f64; 3];

    fn vector_dot(&self, v1: &[f64; 3], v2: &[f64; 3]) -> f64;

    /// Producto escalar de las copias normalizadas (coseno del ángulo).
    fn vector_cosine(&self, v1: &[f64; 3], v2: &[f64; 3]) -> f64;
}

//Backends soportados
pub struct CpuMathBackend;

// Función para seleccionar el mejor backend disponible
pub fn get_optimal_math_backend() -> Box<dyn MathBackend> {
    Box::new(CpuMathBackend)
}

/// Backend compartido por todo el proceso, creado en la primera llamada.
pub fn backend() -> &'static dyn MathBackend {
    static BACKEND: OnceLock<Box<dyn MathBackend>> = OnceLock::new();
    let backend = BACKEND.get_or_init(|| {
        let selected = get_optimal_math_backend();
        log::debug!("Backend matemático seleccionado: {}", selected.name());
        selected
    });
    &**backend
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_backend_is_cpu() {
        assert_eq!(backend().name(), "cpu");
        // Misma instancia en cada llamada
        assert!(std::ptr::addr_eq(backend(), backend()));
    }
}
