/// Sumidero de vértices de modo inmediato: el backend gráfico que recibe
/// `glVertex3*`. La librería no gestiona su estado ni su ciclo de vida; quien
/// llama abre y cierra la primitiva antes y después de enviar vértices.
pub trait VertexSink {
    fn vertex3i(&mut self, x: i32, y: i32, z: i32);
    fn vertex3f(&mut self, x: f32, y: f32, z: f32);
    fn vertex3s(&mut self, x: i16, y: i16, z: i16);
    fn vertex3d(&mut self, x: f64, y: f64, z: f64);
}

/// Un vértice etiquetado con el tipo de la entrada del sumidero que lo recibe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VertexData {
    Int(i32, i32, i32),
    Float(f32, f32, f32),
    Short(i16, i16, i16),
    // Cualquier otro tipo numérico, en doble precisión
    Double(f64, f64, f64),
}

impl VertexData {
    /// Envía el vértice por la entrada que le corresponde. Una llamada por vértice.
    pub fn submit(self, sink: &mut dyn VertexSink) {
        match self {
            VertexData::Int(x, y, z) => sink.vertex3i(x, y, z),
            VertexData::Float(x, y, z) => sink.vertex3f(x, y, z),
            VertexData::Short(x, y, z) => sink.vertex3s(x, y, z),
            VertexData::Double(x, y, z) => sink.vertex3d(x, y, z),
        }
    }
}

/// Sumidero que acumula los vértices recibidos en memoria.
#[derive(Debug, Default, Clone)]
pub struct VertexBuffer {
    pub vertices: Vec<VertexData>,
}

impl VertexBuffer {
    pub fn new() -> Self {
        Self { vertices: Vec::new() }
    }

    pub fn get_vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

impl VertexSink for VertexBuffer {
    fn vertex3i(&mut self, x: i32, y: i32, z: i32) {
        self.vertices.push(VertexData::Int(x, y, z));
    }

    fn vertex3f(&mut self, x: f32, y: f32, z: f32) {
        self.vertices.push(VertexData::Float(x, y, z));
    }

    fn vertex3s(&mut self, x: i16, y: i16, z: i16) {
        self.vertices.push(VertexData::Short(x, y, z));
    }

    fn vertex3d(&mut self, x: f64, y: f64, z: f64) {
        self.vertices.push(VertexData::Double(x, y, z));
    }
}

/// Sumidero de diagnóstico: escribe cada vértice como registro `trace`.
#[derive(Debug, Default)]
pub struct LogSink {
    submitted: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self { submitted: 0 }
    }

    /// Número de vértices recibidos hasta ahora
    pub fn submitted(&self) -> usize {
        self.submitted
    }
}

impl VertexSink for LogSink {
    fn vertex3i(&mut self, x: i32, y: i32, z: i32) {
        self.submitted += 1;
        log::trace!("glVertex3i({}, {}, {})", x, y, z);
    }

    fn vertex3f(&mut self, x: f32, y: f32, z: f32) {
        self.submitted += 1;
        log::trace!("glVertex3f({}, {}, {})", x, y, z);
    }

    fn vertex3s(&mut self, x: i16, y: i16, z: i16) {
        self.submitted += 1;
        log::trace!("glVertex3s({}, {}, {})", x, y, z);
    }

    fn vertex3d(&mut self, x: f64, y: f64, z: f64) {
        self.submitted += 1;
        log::trace!("glVertex3d({}, {}, {})", x, y, z);
    }
}
