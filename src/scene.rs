use cgmath::Vector3;
use rubiks_cube::{
    face::{Face, FACELETS_PER_FACE},
    palette,
    view::{self, Facing, HALF_EXTENT},
    CubeModel,
};

use crate::sticker::Sticker;

/// Unit cells with a 0.1 margin on each side.
const STICKER_HALF_WIDTH: f32 = 0.4;
/// Stickers sit this far off the body so they win the depth test.
const STICKER_LIFT: f32 = 0.005;

/// One body panel plus nine stickers per face.
const QUADS: usize = 6 * (1 + FACELETS_PER_FACE);
pub const MAX_VERTICES: usize = QUADS * 4;
pub const MAX_INDICES: usize = QUADS * 6;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

pub struct Scene {
    pub stickers: Vec<Sticker>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            stickers: Vec::with_capacity(QUADS),
        }
    }

    /// Lay out the body and every facelet of `model`, dimming faces that
    /// `facing` marks inactive.
    pub fn from_model(model: &CubeModel, facing: &Facing) -> Self {
        let mut scene = Self::new();
        for face in Face::ALL {
            let normal = view::normal(face);
            let right = face.right().map(|c| c as f32);
            let up = face.up().map(|c| c as f32);
            let active = facing[face.index()];

            scene.add_sticker(Sticker::new(
                normal * HALF_EXTENT,
                right,
                up,
                HALF_EXTENT,
                palette::BODY,
            ));

            for (index, &color) in model.state().face(face).iter().enumerate() {
                let column = (index % 3) as f32 - 1.;
                let row = (index / 3) as f32 - 1.;
                let centre: Vector3<f32> =
                    normal * (HALF_EXTENT + STICKER_LIFT) + right * column + up * row;
                scene.add_sticker(Sticker::new(
                    centre,
                    right,
                    up,
                    STICKER_HALF_WIDTH,
                    palette::rgb(color, active),
                ));
            }
        }
        scene
    }

    pub fn add_sticker(&mut self, sticker: Sticker) {
        self.stickers.push(sticker);
    }

    pub fn get_vertices_and_indices(&self) -> (Vec<Vertex>, Vec<u32>) {
        let mut vertices: Vec<Vertex> = Vec::with_capacity(self.stickers.len() * 4);
        let mut indices: Vec<u32> = Vec::with_capacity(self.stickers.len() * 6);
        let mut running_index = 0;
        for sticker in self.stickers.iter() {
            vertices.extend(&sticker.vertices);
            indices.extend(sticker.indices.iter().map(|x| x + running_index));
            running_index += sticker.vertices.len() as u32;
        }

        (vertices, indices)
    }
}
