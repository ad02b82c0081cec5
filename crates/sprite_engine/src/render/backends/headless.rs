//! Headless backend
//!
//! Implements the backend, shader and texture collaborators without a GPU.
//! Every call is appended to a shared [`CommandLog`], which makes draw order,
//! uploads and bindings observable from tests and from the sandbox binary.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{BackendResult, BufferId, RenderBackend};
use crate::foundation::math::{Mat4, Vec4};
use crate::render::{RenderError, Shader, Texture};

/// One recorded call
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Vertex buffer allocation
    CreateVertexBuffer {
        /// New buffer
        buffer: BufferId,
        /// Allocated size
        size_bytes: usize,
    },
    /// Index buffer allocation
    CreateIndexBuffer {
        /// New buffer
        buffer: BufferId,
        /// Number of indices uploaded
        index_count: usize,
    },
    /// Vertex data upload
    UploadVertices {
        /// Target buffer
        buffer: BufferId,
        /// Uploaded size
        size_bytes: usize,
    },
    /// Indexed draw
    Draw {
        /// Vertex buffer drawn from
        vertex_buffer: BufferId,
        /// Index buffer drawn with
        index_buffer: BufferId,
        /// Number of indices
        index_count: u32,
    },
    /// Shader activation
    ShaderBind,
    /// Shader deactivation
    ShaderDetach,
    /// Matrix uniform upload
    UniformMat4 {
        /// Uniform name
        name: String,
        /// Uploaded value
        value: Mat4,
    },
    /// Vector uniform upload
    UniformVec4 {
        /// Uniform name
        name: String,
        /// Uploaded value
        value: Vec4,
    },
    /// Scalar uniform upload
    UniformFloat {
        /// Uniform name
        name: String,
        /// Uploaded value
        value: f32,
    },
    /// Integer array uniform upload
    UniformIntArray {
        /// Uniform name
        name: String,
        /// Uploaded values
        values: Vec<i32>,
    },
    /// Texture bound to a unit
    TextureBind {
        /// Texture label
        texture: String,
        /// Texture unit
        unit: u32,
    },
    /// Texture unbound from a unit
    TextureUnbind {
        /// Texture label
        texture: String,
        /// Texture unit
        unit: u32,
    },
}

/// Shared, append-only record of headless calls
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    commands: Rc<RefCell<Vec<Command>>>,
}

impl CommandLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command
    pub fn push(&self, command: Command) {
        self.commands.borrow_mut().push(command);
    }

    /// Copy of every command recorded so far
    pub fn snapshot(&self) -> Vec<Command> {
        self.commands.borrow().clone()
    }

    /// Forget every recorded command
    pub fn clear(&self) {
        self.commands.borrow_mut().clear();
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.borrow().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.commands.borrow().is_empty()
    }

    /// Recorded draws as `(vertex_buffer, index_count)` in submission order
    pub fn draws(&self) -> Vec<(BufferId, u32)> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Command::Draw { vertex_buffer, index_count, .. } => Some((*vertex_buffer, *index_count)),
                _ => None,
            })
            .collect()
    }

    /// Number of vertex uploads recorded
    pub fn upload_count(&self) -> usize {
        self.commands
            .borrow()
            .iter()
            .filter(|c| matches!(c, Command::UploadVertices { .. }))
            .count()
    }
}

/// Backend that validates buffer usage and records it
pub struct HeadlessBackend {
    log: CommandLog,
    next_buffer: u32,
    vertex_buffers: HashMap<BufferId, usize>,
    index_buffers: HashMap<BufferId, usize>,
}

impl HeadlessBackend {
    /// Create a backend recording into `log`
    pub fn new(log: CommandLog) -> Self {
        Self {
            log,
            next_buffer: 1,
            vertex_buffers: HashMap::new(),
            index_buffers: HashMap::new(),
        }
    }

    fn allocate(&mut self) -> BufferId {
        let id = BufferId(self.next_buffer);
        self.next_buffer += 1;
        id
    }
}

impl RenderBackend for HeadlessBackend {
    fn create_vertex_buffer(&mut self, size_bytes: usize) -> BackendResult<BufferId> {
        let buffer = self.allocate();
        self.vertex_buffers.insert(buffer, size_bytes);
        self.log.push(Command::CreateVertexBuffer { buffer, size_bytes });
        Ok(buffer)
    }

    fn create_index_buffer(&mut self, indices: &[u32]) -> BackendResult<BufferId> {
        let buffer = self.allocate();
        self.index_buffers.insert(buffer, indices.len());
        self.log.push(Command::CreateIndexBuffer { buffer, index_count: indices.len() });
        Ok(buffer)
    }

    fn upload_vertices(&mut self, buffer: BufferId, data: &[u8]) -> BackendResult<()> {
        let capacity = *self
            .vertex_buffers
            .get(&buffer)
            .ok_or_else(|| RenderError::Backend(format!("unknown vertex buffer {buffer:?}")))?;
        if data.len() > capacity {
            return Err(RenderError::Backend(format!(
                "upload of {} bytes overflows vertex buffer {:?} ({} bytes)",
                data.len(),
                buffer,
                capacity
            )));
        }
        self.log.push(Command::UploadVertices { buffer, size_bytes: data.len() });
        Ok(())
    }

    fn draw_indexed(
        &mut self,
        vertex_buffer: BufferId,
        index_buffer: BufferId,
        index_count: u32,
    ) -> BackendResult<()> {
        if !self.vertex_buffers.contains_key(&vertex_buffer) {
            return Err(RenderError::Backend(format!("unknown vertex buffer {vertex_buffer:?}")));
        }
        let available = *self
            .index_buffers
            .get(&index_buffer)
            .ok_or_else(|| RenderError::Backend(format!("unknown index buffer {index_buffer:?}")))?;
        if index_count as usize > available {
            return Err(RenderError::Backend(format!(
                "draw of {index_count} indices exceeds index buffer {index_buffer:?} ({available})"
            )));
        }
        self.log.push(Command::Draw { vertex_buffer, index_buffer, index_count });
        Ok(())
    }
}

/// Shader that records activation and uniform uploads
pub struct HeadlessShader {
    log: CommandLog,
    bound: bool,
}

impl HeadlessShader {
    /// Create a shader recording into `log`
    pub fn new(log: CommandLog) -> Self {
        Self { log, bound: false }
    }

    /// Whether the program is currently active
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    // Uniform uploads activate the program first, like a GL shader wrapper would
    fn ensure_bound(&mut self) {
        if !self.bound {
            self.bind();
        }
    }
}

impl Shader for HeadlessShader {
    fn bind(&mut self) {
        if !self.bound {
            self.bound = true;
            self.log.push(Command::ShaderBind);
        }
    }

    fn detach(&mut self) {
        self.bound = false;
        self.log.push(Command::ShaderDetach);
    }

    fn upload_mat4(&mut self, name: &str, value: &Mat4) {
        self.ensure_bound();
        self.log.push(Command::UniformMat4 { name: name.to_string(), value: *value });
    }

    fn upload_vec4(&mut self, name: &str, value: &Vec4) {
        self.ensure_bound();
        self.log.push(Command::UniformVec4 { name: name.to_string(), value: *value });
    }

    fn upload_float(&mut self, name: &str, value: f32) {
        self.ensure_bound();
        self.log.push(Command::UniformFloat { name: name.to_string(), value });
    }

    fn upload_int_array(&mut self, name: &str, values: &[i32]) {
        self.ensure_bound();
        self.log.push(Command::UniformIntArray { name: name.to_string(), values: values.to_vec() });
    }
}

/// Texture with a fixed size that records bind calls
pub struct HeadlessTexture {
    label: String,
    width: u32,
    height: u32,
    log: CommandLog,
}

impl HeadlessTexture {
    /// Create a texture recording into `log`
    pub fn new(label: impl Into<String>, width: u32, height: u32, log: CommandLog) -> Self {
        Self {
            label: label.into(),
            width,
            height,
            log,
        }
    }
}

impl Texture for HeadlessTexture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn bind(&self, unit: u32) {
        self.log.push(Command::TextureBind { texture: self.label.clone(), unit });
    }

    fn unbind(&self, unit: u32) {
        self.log.push(Command::TextureUnbind { texture: self.label.clone(), unit });
    }

    fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_overflow_is_rejected() {
        let log = CommandLog::new();
        let mut backend = HeadlessBackend::new(log.clone());
        let buffer = backend.create_vertex_buffer(16).unwrap();

        assert!(backend.upload_vertices(buffer, &[0u8; 16]).is_ok());
        assert!(matches!(backend.upload_vertices(buffer, &[0u8; 17]), Err(RenderError::Backend(_))));
        assert_eq!(log.upload_count(), 1);
    }

    #[test]
    fn test_draw_checks_index_range() {
        let log = CommandLog::new();
        let mut backend = HeadlessBackend::new(log.clone());
        let vertices = backend.create_vertex_buffer(64).unwrap();
        let indices = backend.create_index_buffer(&[0, 1, 2, 2, 3, 0]).unwrap();

        backend.draw_indexed(vertices, indices, 6).unwrap();
        assert!(backend.draw_indexed(vertices, indices, 12).is_err());
        assert!(backend.draw_indexed(indices, indices, 6).is_err());
        assert_eq!(log.draws(), vec![(vertices, 6)]);
    }

    #[test]
    fn test_uniform_upload_binds_shader() {
        let log = CommandLog::new();
        let mut shader = HeadlessShader::new(log.clone());

        shader.upload_float("uTime", 1.5);
        assert!(shader.is_bound());
        shader.detach();
        assert!(!shader.is_bound());

        assert_eq!(
            log.snapshot(),
            vec![
                Command::ShaderBind,
                Command::UniformFloat { name: "uTime".to_string(), value: 1.5 },
                Command::ShaderDetach,
            ]
        );
    }
}
