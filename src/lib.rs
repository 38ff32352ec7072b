// Punto 3D genérico para una capa de renderizado inmediato
// Exportación de módulos

pub mod renderer {
    pub mod core {
        pub mod capability;
        pub mod math;
        pub mod math_cpu;
        pub mod point;
        pub mod scalar;
    }

    pub mod sink;
}

pub mod error;

pub use error::PointError;
pub use renderer::core::capability::{plot_all, Plottable, Scalable, Vectorizable};
pub use renderer::core::point::{Point3, Point3f};
pub use renderer::core::scalar::Scalar;
pub use renderer::sink::{LogSink, VertexBuffer, VertexData, VertexSink};

/// Inicializa la librería y configura el logger.
/// Si el proceso ya tenía un logger instalado se conserva ese.
#[cfg(feature = "std")]
pub fn init() {
    if let Err(err) = env_logger::try_init() {
        log::debug!("Logger ya instalado, se mantiene: {}", err);
    }
    log::info!("Inicializando plotpoint v{}", env!("CARGO_PKG_VERSION"));
}
