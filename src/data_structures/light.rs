use cgmath::{Deg, InnerSpace, Matrix4, Vector3, Vector4, Zero};

/// Cone restriction turning a positional light into a spotlight.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spot {
    pub direction: Vector3<f32>,
    pub cutoff: Deg<f32>,
}

/// A light source in the fixed lighting model.
///
/// `position.w == 0` describes a directional light, otherwise the light is
/// positional. Colours are RGB intensities.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Vector4<f32>,
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub spot: Option<Spot>,
    pub switched_on: bool,
}

impl Light {
    pub fn point(
        position: [f32; 4],
        ambient: [f32; 3],
        diffuse: [f32; 3],
        specular: [f32; 3],
    ) -> Self {
        Self {
            position: position.into(),
            ambient,
            diffuse,
            specular,
            spot: None,
            switched_on: true,
        }
    }

    pub fn make_spotlight(mut self, direction: [f32; 3], cutoff: Deg<f32>) -> Self {
        self.spot = Some(Spot {
            direction: direction.into(),
            cutoff,
        });
        self
    }

    pub fn set_switched_on(&mut self, on: bool) {
        self.switched_on = on;
    }

    /// The light as seen from world space when defined in the frame of `model`.
    pub fn placed(&self, model: Matrix4<f32>) -> Self {
        let spot = self.spot.map(|spot| {
            let direction = (model * spot.direction.extend(0.0)).truncate();
            Spot {
                direction: if direction.is_zero() {
                    direction
                } else {
                    direction.normalize()
                },
                cutoff: spot.cutoff,
            }
        });
        Self {
            position: model * self.position,
            spot,
            ..*self
        }
    }
}
