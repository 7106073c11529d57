mod emitter;
mod point;
mod disk;

pub use self::emitter::Emitter;
pub use self::point::PointEmitter;
pub use self::disk::DiskEmitter;

use rand::Rng;

use crate::math::Vector3;

/// Emission geometry: where particles appear and which way they travel
#[derive(Debug, Clone, PartialEq)]
pub enum EmitterShape {
    Point(PointEmitter),
    Disk(DiskEmitter),
}

impl EmitterShape {
    /// Returns the type name of the shape
    pub fn shape_type(&self) -> &'static str {
        match self {
            EmitterShape::Point(_) => "Point",
            EmitterShape::Disk(_) => "Disk",
        }
    }

    /// Returns the anchor position of the emitter
    pub fn position(&self) -> Vector3 {
        match self {
            EmitterShape::Point(point) => point.position(),
            EmitterShape::Disk(disk) => disk.position(),
        }
    }

    /// Draws an initial position and velocity for a particle launched at `speed`
    pub fn sample_launch<R: Rng + ?Sized>(&self, speed: f32, rng: &mut R) -> (Vector3, Vector3) {
        match self {
            EmitterShape::Point(point) => point.sample_launch(speed, rng),
            EmitterShape::Disk(disk) => disk.sample_launch(speed, rng),
        }
    }
}

impl From<PointEmitter> for EmitterShape {
    fn from(point: PointEmitter) -> Self {
        EmitterShape::Point(point)
    }
}

impl From<DiskEmitter> for EmitterShape {
    fn from(disk: DiskEmitter) -> Self {
        EmitterShape::Disk(disk)
    }
}
