use crate::error::PointError;
use crate::renderer::sink::VertexSink;

/// Algo que sabe enviarse a un sumidero de vértices.
///
/// Solo debe llamarse con el contexto de renderizado aceptando vértices
/// (entre el inicio y el fin de una primitiva); no se comprueba.
pub trait Plottable {
    fn plot(&self, sink: &mut dyn VertexSink);
}

/// Volcado a un array plano de componentes.
pub trait Vectorizable<N> {
    /// Copia las componentes en `out` y devuelve cuántas escribió.
    /// Si `out` es demasiado corto no escribe nada y devuelve
    /// `PointError::BufferTooSmall`.
    fn to_vector(&self, out: &mut [N]) -> Result<usize, PointError>;
}

/// Escalado uniforme en sitio. Las figuras compuestas lo redefinen.
pub trait Scalable<N> {
    fn scale(&mut self, amount: N);
}

/// Envía todas las figuras al sumidero, en orden.
pub fn plot_all<'a, I>(shapes: I, sink: &mut dyn VertexSink)
where
    I: IntoIterator<Item = &'a dyn Plottable>,
{
    for shape in shapes {
        shape.plot(sink);
    }
}
