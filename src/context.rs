//! The render-backend boundary and the software matrix-stack context.
//!
//! The engine talks to a graphics device through [`RenderBackend`]: one
//! buffer upload, one triangle-list draw call, and fixed-function style
//! matrix-stack primitives. Any 3D API exposing these operations can drive
//! the scene renderer.
//!
//! [`SoftwareContext`] implements the boundary on the CPU: uploads land in
//! byte buffers exactly as a device upload would, and draw calls are
//! recorded together with the model matrix in effect when they were issued.
//! It is the reference implementation and the test harness; bindings to an
//! actual graphics API live outside this crate.

use cgmath::{Deg, InnerSpace, Matrix4, SquareMatrix, Vector3};
use log::warn;

use crate::data_structures::model::Vertex;

/// Opaque identifier of an uploaded vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u32);

/// Everything the scene renderer needs from a graphics device.
///
/// The matrix primitives follow the classic matrix-stack discipline: the
/// current matrix is post-multiplied, `push_matrix` saves it and
/// `pop_matrix` restores the last saved one.
pub trait RenderBackend {
    /// Uploads a flat triangle list once and returns its handle.
    fn upload_buffer(&mut self, vertices: &[Vertex]) -> BufferHandle;

    /// Submits a triangle-list draw of a previously uploaded buffer.
    fn draw(&mut self, handle: BufferHandle, vertex_count: usize);

    fn push_matrix(&mut self);

    fn pop_matrix(&mut self);

    fn translate(&mut self, offset: Vector3<f32>);

    /// Rotation of `angle` degrees about `axis`. The axis does not need to
    /// be normalized; a zero axis is a no-op.
    fn rotate(&mut self, angle: f32, axis: Vector3<f32>);

    fn scale(&mut self, factors: Vector3<f32>);

    fn mult_matrix(&mut self, matrix: Matrix4<f32>);
}

/// One recorded draw call of a [`SoftwareContext`] frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub handle: BufferHandle,
    pub vertex_count: usize,
    /// Model matrix in effect when the draw was issued.
    pub matrix: Matrix4<f32>,
}

/// CPU implementation of [`RenderBackend`].
///
/// Buffers are kept as raw bytes the way a device would receive them and can
/// be read back as vertices for inspection.
pub struct SoftwareContext {
    buffers: Vec<Vec<u8>>,
    stack: Vec<Matrix4<f32>>,
    draw_calls: Vec<DrawCall>,
}

impl SoftwareContext {
    pub fn new() -> Self {
        Self {
            buffers: Vec::new(),
            stack: vec![Matrix4::identity()],
            draw_calls: Vec::new(),
        }
    }

    /// The matrix currently on top of the stack.
    pub fn current_matrix(&self) -> Matrix4<f32> {
        self.stack.last().copied().unwrap_or_else(|| Matrix4::identity())
    }

    /// Draw calls recorded since the last [`Self::begin_frame`].
    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.draw_calls
    }

    /// Reads an uploaded buffer back as vertices.
    pub fn buffer_vertices(&self, handle: BufferHandle) -> &[Vertex] {
        bytemuck::cast_slice(&self.buffers[handle.0 as usize])
    }

    /// Clears the recorded draw calls and resets the matrix stack. Uploaded
    /// buffers survive, matching device buffer lifetimes.
    pub fn begin_frame(&mut self) {
        self.draw_calls.clear();
        self.stack.clear();
        self.stack.push(Matrix4::identity());
    }

    fn current_mut(&mut self) -> &mut Matrix4<f32> {
        // The stack is never empty, pop_matrix keeps the root entry.
        self.stack.last_mut().unwrap()
    }
}

impl Default for SoftwareContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for SoftwareContext {
    fn upload_buffer(&mut self, vertices: &[Vertex]) -> BufferHandle {
        let handle = BufferHandle(self.buffers.len() as u32);
        self.buffers.push(bytemuck::cast_slice(vertices).to_vec());
        handle
    }

    fn draw(&mut self, handle: BufferHandle, vertex_count: usize) {
        self.draw_calls.push(DrawCall {
            handle,
            vertex_count,
            matrix: self.current_matrix(),
        });
    }

    fn push_matrix(&mut self) {
        self.stack.push(self.current_matrix());
    }

    fn pop_matrix(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        } else {
            warn!("matrix stack underflow: pop_matrix without a matching push, ignoring");
        }
    }

    fn translate(&mut self, offset: Vector3<f32>) {
        *self.current_mut() = self.current_matrix() * Matrix4::from_translation(offset);
    }

    fn rotate(&mut self, angle: f32, axis: Vector3<f32>) {
        if axis.magnitude2() < f32::EPSILON {
            return;
        }
        *self.current_mut() =
            self.current_matrix() * Matrix4::from_axis_angle(axis.normalize(), Deg(angle));
    }

    fn scale(&mut self, factors: Vector3<f32>) {
        *self.current_mut() =
            self.current_matrix() * Matrix4::from_nonuniform_scale(factors.x, factors.y, factors.z);
    }

    fn mult_matrix(&mut self, matrix: Matrix4<f32>) {
        *self.current_mut() = self.current_matrix() * matrix;
    }
}
