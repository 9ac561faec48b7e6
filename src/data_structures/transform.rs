//! A model matrix stack with fixed-function semantics.
//!
//! Every operation post-multiplies the top of the stack, so the transform
//! issued last is the first one applied to a vertex. `push` duplicates the
//! top, `pop` restores the previous one.

use cgmath::{Deg, InnerSpace, Matrix4, SquareMatrix, Vector3, Zero};

#[derive(Clone, Debug)]
pub struct MatrixStack {
    stack: Vec<Matrix4<f32>>,
}

impl MatrixStack {
    pub fn new() -> Self {
        Self::from_matrix(Matrix4::identity())
    }

    pub fn from_matrix(matrix: Matrix4<f32>) -> Self {
        Self {
            stack: vec![matrix],
        }
    }

    pub fn top(&self) -> Matrix4<f32> {
        // the stack never drops below one entry
        self.stack[self.stack.len() - 1]
    }

    fn top_mut(&mut self) -> &mut Matrix4<f32> {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn apply(&mut self, m: Matrix4<f32>) {
        let top = self.top();
        *self.top_mut() = top * m;
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self) {
        let top = self.top();
        self.stack.push(top);
    }

    pub fn pop(&mut self) {
        if self.stack.len() == 1 {
            log::warn!("matrix stack underflow, keeping the base matrix");
            return;
        }
        self.stack.pop();
    }

    pub fn translate(&mut self, x: f64, y: f64, z: f64) {
        let m = Matrix4::from_translation(Vector3::new(x as f32, y as f32, z as f32));
        self.apply(m);
    }

    /// Rotates by `angle` degrees counter-clockwise around the given axis.
    pub fn rotate(&mut self, angle: f64, x: f64, y: f64, z: f64) {
        let axis = Vector3::new(x as f32, y as f32, z as f32);
        if axis.is_zero() {
            return;
        }
        let m = Matrix4::from_axis_angle(axis.normalize(), Deg(angle as f32));
        self.apply(m);
    }

    pub fn scale(&mut self, x: f64, y: f64, z: f64) {
        let m = Matrix4::from_nonuniform_scale(x as f32, y as f32, z as f32);
        self.apply(m);
    }

    /// Runs `f` between a push and the matching pop.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push();
        let result = f(self);
        self.pop();
        result
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Point3, Transform};

    fn assert_close(a: Point3<f32>, b: Point3<f32>) {
        assert!(
            (a - b).magnitude() < 1e-4,
            "expected {:?} to be close to {:?}",
            a,
            b
        );
    }

    #[test]
    fn later_transforms_apply_first() {
        let mut stack = MatrixStack::new();
        stack.translate(10.0, 0.0, 0.0);
        stack.rotate(90.0, 0.0, 1.0, 0.0);
        let p = stack.top().transform_point(Point3::new(1.0, 0.0, 0.0));
        // rotate (1,0,0) to (0,0,-1), then move it
        assert_close(p, Point3::new(10.0, 0.0, -1.0));
    }

    #[test]
    fn pop_restores_previous_matrix() {
        let mut stack = MatrixStack::new();
        stack.translate(1.0, 2.0, 3.0);
        stack.push();
        stack.scale(5.0, 5.0, 5.0);
        assert_eq!(stack.depth(), 2);
        stack.pop();
        let p = stack.top().transform_point(Point3::new(1.0, 1.0, 1.0));
        assert_close(p, Point3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn underflow_keeps_base_matrix() {
        let mut stack = MatrixStack::new();
        stack.translate(0.0, 4.0, 0.0);
        stack.pop();
        stack.pop();
        assert_eq!(stack.depth(), 1);
        let p = stack.top().transform_point(Point3::new(0.0, 0.0, 0.0));
        assert_close(p, Point3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn negative_axis_rotates_the_other_way() {
        let mut stack = MatrixStack::new();
        stack.rotate(90.0, -1.0, 0.0, 0.0);
        let p = stack.top().transform_point(Point3::new(0.0, 0.0, 1.0));
        assert_close(p, Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn scoped_pops_after_closure() {
        let mut stack = MatrixStack::new();
        let inner = stack.scoped(|s| {
            s.translate(1.0, 0.0, 0.0);
            s.depth()
        });
        assert_eq!(inner, 2);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top(), Matrix4::identity());
    }
}
