//! The articulated desk lamp.
//!
//! The rig is composed bottom-up on a [`MatrixStack`]: base, lower arm pair,
//! middle joint, upper arm pair and the head with its shade, switch, cone and
//! bulb. Every part is emitted as a [`DrawCall`] in the current frame of the
//! stack, so the caller decides where the lamp stands.

use cgmath::Deg;

use crate::{
    animation::LampPose,
    data_structures::{light::Light, material::Material, mesh::MeshKind, transform::MatrixStack},
    render::DrawCall,
};

const BULB_RADIUS: f64 = 0.08;

#[derive(Clone, Debug)]
pub struct Lamp {
    light: Light,
}

impl Lamp {
    pub fn new() -> Self {
        let light = Light::point(
            [0.0, 0.0, 0.0, 1.0],
            [0.1, 0.1, 0.1],
            [1.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
        )
        .make_spotlight([0.0, 0.0, -1.0], Deg(45.0));
        Self { light }
    }

    /// The spotlight in the frame of the lamp head.
    pub fn light(&self) -> &Light {
        &self.light
    }

    pub fn light_mut(&mut self) -> &mut Light {
        &mut self.light
    }

    /// Emits the rig at the current stack frame and returns the spotlight in world space.
    ///
    /// The stack is left as it was found.
    pub fn draw(
        &self,
        stack: &mut MatrixStack,
        size: f64,
        pose: &LampPose,
        out: &mut Vec<DrawCall>,
    ) -> Light {
        let base_width = size;
        let base_height = base_width * 0.1;
        let lower_arm_length = 1.5 * size;
        let lower_arm_radius = 0.05 * size;
        let upper_arm_length = size;
        let upper_arm_radius = lower_arm_radius;
        let joint_radius = base_width * 0.2;
        let cone_size = 0.7 * base_width;
        let arm_spacing = 0.05 * size;

        let red = |mesh, model| DrawCall::new(mesh, model, Material::RED_PLASTIC);
        let gold = |mesh, model| DrawCall::new(mesh, model, Material::GOLD);

        stack.push();

        stack.scoped(|s| {
            s.rotate(pose.base_rot, 1.0, 0.0, 0.0);
            s.scoped(|s| {
                s.scale(base_width, base_height, base_width);
                s.rotate(90.0, -1.0, 0.0, 0.0);
                out.push(red(MeshKind::Cylinder, s.top()));
            });
            // bottom joint
            s.scoped(|s| {
                s.scale(base_width * 0.4, joint_radius, base_width * 0.4);
                s.rotate(90.0, -1.0, 0.0, 0.0);
                out.push(red(MeshKind::Cylinder, s.top()));
            });
        });

        stack.rotate(pose.lower_rot, 1.0, 0.0, 0.0);

        // cross brace between the lower arms
        stack.scoped(|s| {
            s.translate(arm_spacing * base_width, lower_arm_length * 0.5 + base_height, 0.0);
            s.rotate(90.0, 0.0, 0.0, 1.0);
            s.scale(lower_arm_radius, arm_spacing * base_width * 2.0, lower_arm_radius);
            s.rotate(90.0, -1.0, 0.0, 0.0);
            out.push(red(MeshKind::Cylinder, s.top()));
        });
        for side in [-1.0, 1.0] {
            stack.scoped(|s| {
                s.translate(side * base_width * arm_spacing, base_height, 0.0);
                s.scale(lower_arm_radius, lower_arm_length, lower_arm_radius);
                s.rotate(90.0, -1.0, 0.0, 0.0);
                out.push(red(MeshKind::Cylinder, s.top()));
            });
        }

        stack.translate(0.0, lower_arm_length, 0.0);
        stack.rotate(pose.upper_rot, 1.0, 0.0, 0.0);

        stack.scoped(|s| {
            s.scale(joint_radius, joint_radius, joint_radius);
            out.push(gold(MeshKind::Sphere, s.top()));
        });

        for side in [1.0, -1.0] {
            stack.scoped(|s| {
                s.translate(side * base_width * arm_spacing, 0.0, 0.0);
                s.scale(upper_arm_radius, upper_arm_length, upper_arm_radius);
                s.rotate(90.0, -1.0, 0.0, 0.0);
                out.push(red(MeshKind::Cylinder, s.top()));
            });
        }

        stack.translate(0.0, upper_arm_length, 0.0);

        let light = stack.scoped(|s| {
            s.rotate(pose.cone_hor_rot, 0.0, 1.0, 0.0);
            s.rotate(pose.cone_vert_rot, 1.0, 0.0, 0.0);
            s.rotate(270.0, 1.0, 0.0, 0.0);
            s.translate(0.0, -cone_size, 0.0);

            s.scoped(|s| {
                // shade
                s.scoped(|s| {
                    s.translate(0.0, cone_size - 0.9 * 0.8 * cone_size, 0.0);
                    s.scale(cone_size * 0.6, cone_size * 0.8, cone_size * 0.6);
                    s.rotate(90.0, -1.0, 0.0, 0.0);
                    out.push(red(MeshKind::Cylinder, s.top()));
                });
                // switch
                s.scoped(|s| {
                    s.translate(0.0, cone_size, 0.0);
                    s.rotate(30.0, 0.0, 0.0, 1.0);
                    s.translate(-0.05 * cone_size, 0.0, 0.0);
                    s.scale(0.4 * cone_size, 0.2 * cone_size, 0.1 * cone_size);
                    out.push(gold(MeshKind::Cube, s.top()));
                });
            });

            s.rotate(90.0, -1.0, 0.0, 0.0);
            // the inside of the cone is visible through its open base
            s.scoped(|s| {
                s.scale(cone_size, cone_size, cone_size);
                out.push(gold(MeshKind::Cone, s.top()).double_sided());
            });
            s.scale(size, size, size);
            self.place_light(s, out)
        });

        stack.pop();
        light
    }

    fn place_light(&self, stack: &mut MatrixStack, out: &mut Vec<DrawCall>) -> Light {
        stack.scoped(|s| {
            s.scale(2.5, 2.5, 2.5);
            if self.light.switched_on {
                s.scoped(|s| {
                    s.scale(BULB_RADIUS, BULB_RADIUS, BULB_RADIUS);
                    out.push(DrawCall::new(MeshKind::Sphere, s.top(), Material::BULB));
                });
            }
            self.light.placed(s.top())
        })
    }
}

impl Default for Lamp {
    fn default() -> Self {
        Self::new()
    }
}

