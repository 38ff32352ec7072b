// Dibuja un anillo de puntos en coordenadas esféricas sobre un sumidero de log.
// Ejecutar con: RUST_LOG=trace cargo run --example spherical_ring

use plotpoint::{plot_all, LogSink, Plottable, Point3f};
use std::f32::consts::TAU;

const SEGMENTS: usize = 16;
const RADIUS: f32 = 2.0;

fn main() {
    plotpoint::init();

    // Inclinación variable, azimut fijo: un círculo en el plano XZ
    let ring: Vec<Point3f> = (0..SEGMENTS)
        .map(|i| Point3f::from_spherical(RADIUS, TAU * i as f32 / SEGMENTS as f32, 0.0))
        .collect();

    let mut sink = LogSink::new();
    plot_all(ring.iter().map(|p| p as &dyn Plottable), &mut sink);

    for pair in ring.windows(2) {
        log::debug!("{} -> {}: coseno {:.4}", pair[0], pair[1], pair[0].dot(&pair[1]));
    }

    log::info!("Vértices enviados: {}", sink.submitted());
}
