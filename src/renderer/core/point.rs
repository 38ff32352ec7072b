use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::capability::{Plottable, Scalable, Vectorizable};
use super::math;
use super::scalar::Scalar;
use crate::error::PointError;
use crate::renderer::sink::VertexSink;

/// Punto (o vector) en el espacio 3D.
///
/// Valor plano en la pila: tres componentes de tipo `N`, sin recursos externos.
/// `Point3::default()` es el origen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3<N = f32> {
    x: N,
    y: N,
    z: N,
}

pub type Point3f = Point3<f32>;

impl<N: Scalar> Point3<N> {
    pub fn new(x: N, y: N, z: N) -> Self {
        Self { x, y, z }
    }

    /// Construye un punto desde coordenadas esféricas (radio, inclinación, azimut).
    ///
    /// Convención propia de esta librería, no la habitual de física:
    ///
    /// ```text
    /// x = -r * sin(theta) * cos(phi)
    /// y =  r * sin(phi)
    /// z =  r * cos(theta) * cos(phi)
    /// ```
    ///
    /// El cálculo se hace en f64 y se convierte al final a `N`.
    pub fn from_spherical(r: N, theta: N, phi: N) -> Self {
        let (r, th, ph) = (r.to_f64(), theta.to_f64(), phi.to_f64());
        Self::new(
            N::from_f64(-r * th.sin() * ph.cos()),
            N::from_f64(r * ph.sin()),
            N::from_f64(r * th.cos() * ph.cos()),
        )
    }

    /// Igual que `from_spherical`, tomando (r, theta, phi) de un contenedor de 3.
    pub fn from_spherical_vec<V: Into<[N; 3]>>(spherical: V) -> Self {
        let [r, theta, phi] = spherical.into();
        Self::from_spherical(r, theta, phi)
    }

    pub fn x(&self) -> &N {
        &self.x
    }

    pub fn y(&self) -> &N {
        &self.y
    }

    pub fn z(&self) -> &N {
        &self.z
    }

    // Sin validación: NaN e Inf se aceptan tal cual
    pub fn set_x(&mut self, x: N) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: N) {
        self.y = y;
    }

    pub fn set_z(&mut self, z: N) {
        self.z = z;
    }

    /// Copia `other` en este punto y devuelve `self` para encadenar.
    pub fn assign(&mut self, other: &Self) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self.z = other.z;
        self
    }

    pub fn to_array(&self) -> [N; 3] {
        [self.x, self.y, self.z]
    }

    fn to_f64_array(&self) -> [f64; 3] {
        [self.x.to_f64(), self.y.to_f64(), self.z.to_f64()]
    }

    /// Norma euclídea, siempre en coma flotante aunque `N` sea entero.
    pub fn magnitude(&self) -> f64 {
        math::backend().vector_length(&self.to_f64_array())
    }

    /// Divide cada componente por la magnitud actual.
    ///
    /// No comprueba la magnitud cero: en tipos flotantes las componentes quedan
    /// en NaN, en enteros la conversión satura a 0. Usar `try_normalize` para
    /// detectar ese caso. En tipos enteros cada cociente se trunca.
    pub fn normalize(&mut self) {
        let [x, y, z] = math::backend().vector_normalize(&self.to_f64_array());
        self.x = N::from_f64(x);
        self.y = N::from_f64(y);
        self.z = N::from_f64(z);
    }

    /// Como `normalize`, pero falla con `ZeroMagnitude` sin tocar el punto.
    pub fn try_normalize(&mut self) -> Result<(), PointError> {
        if self.magnitude() == 0.0 {
            log::debug!("Normalización rechazada para {}", self);
            return Err(PointError::ZeroMagnitude);
        }
        self.normalize();
        Ok(())
    }

    /// Producto escalar de las copias normalizadas de ambos puntos.
    ///
    /// Ojo: no es el producto escalar clásico. Devuelve el coseno del ángulo
    /// entre los dos vectores, independiente de sus magnitudes. Si alguno es
    /// el vector cero el resultado es NaN. Siempre devuelve f64, también
    /// con `N` entero.
    pub fn dot(&self, other: &Self) -> f64 {
        math::backend().vector_cosine(&self.to_f64_array(), &other.to_f64_array())
    }

    /// Producto vectorial (mano derecha) sobre los vectores originales.
    /// En enteros el desbordamiento da la vuelta en lugar de fallar.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y.wrapping_mul(other.z).wrapping_sub(self.z.wrapping_mul(other.y)),
            self.z.wrapping_mul(other.x).wrapping_sub(self.x.wrapping_mul(other.z)),
            self.x.wrapping_mul(other.y).wrapping_sub(self.y.wrapping_mul(other.x)),
        )
    }

    /// Escalado uniforme en sitio, equivalente a `*=`.
    pub fn scale(&mut self, amount: N) {
        self.x = self.x.wrapping_mul(amount);
        self.y = self.y.wrapping_mul(amount);
        self.z = self.z.wrapping_mul(amount);
    }
}

impl<N: Scalar> fmt::Display for Point3<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {}, {} )", self.x, self.y, self.z)
    }
}

impl<N: Scalar> AddAssign for Point3<N> {
    fn add_assign(&mut self, other: Self) {
        self.x = self.x.wrapping_add(other.x);
        self.y = self.y.wrapping_add(other.y);
        self.z = self.z.wrapping_add(other.z);
    }
}

impl<N: Scalar> SubAssign for Point3<N> {
    fn sub_assign(&mut self, other: Self) {
        self.x = self.x.wrapping_sub(other.x);
        self.y = self.y.wrapping_sub(other.y);
        self.z = self.z.wrapping_sub(other.z);
    }
}

impl<N: Scalar> MulAssign<N> for Point3<N> {
    fn mul_assign(&mut self, scalar: N) {
        self.scale(scalar);
    }
}

impl<N: Scalar> Add for Point3<N> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        let mut ret = self;
        ret += other;
        ret
    }
}

impl<N: Scalar> Sub for Point3<N> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        let mut ret = self;
        ret -= other;
        ret
    }
}

impl<N: Scalar> Mul<N> for Point3<N> {
    type Output = Self;

    fn mul(self, scalar: N) -> Self::Output {
        let mut ret = self;
        ret *= scalar;
        ret
    }
}

impl<N: Scalar + Neg<Output = N>> Neg for Point3<N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(self.x.wrapping_neg(), self.y.wrapping_neg(), self.z.wrapping_neg())
    }
}

impl<N: Scalar> From<[N; 3]> for Point3<N> {
    fn from([x, y, z]: [N; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<N: Scalar> From<(N, N, N)> for Point3<N> {
    fn from((x, y, z): (N, N, N)) -> Self {
        Self::new(x, y, z)
    }
}

impl<N: Scalar> From<Point3<N>> for [N; 3] {
    fn from(p: Point3<N>) -> Self {
        p.to_array()
    }
}

impl<N: Scalar> Plottable for Point3<N> {
    // Una sola llamada al sumidero, elegida según el tipo de N
    fn plot(&self, sink: &mut dyn VertexSink) {
        N::vertex(self.x, self.y, self.z).submit(sink);
    }
}

impl<N: Scalar> Vectorizable<N> for Point3<N> {
    fn to_vector(&self, out: &mut [N]) -> Result<usize, PointError> {
        if out.len() < 3 {
            return Err(PointError::BufferTooSmall { len: out.len() });
        }
        out[..3].copy_from_slice(&self.to_array());
        Ok(3)
    }
}

impl<N: Scalar> Scalable<N> for Point3<N> {
    fn scale(&mut self, amount: N) {
        Point3::scale(self, amount);
    }
}
