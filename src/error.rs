use thiserror::Error;

/// Errores locales de las operaciones de `Point3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PointError {
    /// El buffer de destino tiene menos de 3 posiciones
    #[error("buffer too small for a 3-component point: {len} slots")]
    BufferTooSmall { len: usize },

    /// Normalización de un vector de magnitud cero
    #[error("cannot normalize a zero-magnitude point")]
    ZeroMagnitude,
}

impl PointError {
    /// Código entero heredado: -1 para cualquier fallo.
    pub fn code(&self) -> i32 {
        -1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_and_code() {
        let err = PointError::BufferTooSmall { len: 2 };
        assert_eq!(err.to_string(), "buffer too small for a 3-component point: 2 slots");
        assert_eq!(err.code(), -1);
        assert_eq!(PointError::ZeroMagnitude.code(), -1);
    }
}
