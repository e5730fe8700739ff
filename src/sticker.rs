use cgmath::Vector3;

use crate::scene::Vertex;

/// A flat coloured square facing along `right x up`.
pub struct Sticker {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Sticker {
    pub fn new(
        centre: Vector3<f32>,
        right: Vector3<f32>,
        up: Vector3<f32>,
        half_width: f32,
        color: [f32; 3],
    ) -> Self {
        let mut vertices = Vec::with_capacity(4);

        // bottom-left, bottom-right, top-right, top-left
        for (dr, du) in [(-1., -1.), (1., -1.), (1., 1.), (-1., 1.)] {
            let corner = centre + right * (dr * half_width) + up * (du * half_width);
            vertices.push(Vertex {
                position: corner.into(),
                color,
            })
        }

        // Counter-clockwise seen from the front so back faces cull.
        #[rustfmt::skip]
        let indices = vec![
            0, 1, 2,
            0, 2, 3,
        ];

        Self { vertices, indices }
    }
}
