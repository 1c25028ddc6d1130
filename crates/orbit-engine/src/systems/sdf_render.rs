use crate::components::entity::Entity;
use crate::renderer::sdf_instance::{SDFBuffer, SDFInstance};

/// Rebuild the SDF instance buffer from handles with a mesh.
/// Inactive handles and handles without a mesh are skipped.
pub fn build_sdf_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut SDFBuffer,
) {
    buffer.clear();
    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        let pushed = buffer.push(SDFInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            radius: mesh.radius(),
            opacity: mesh.opacity,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            glow_radius: mesh.glow.radius,
            glow_r: mesh.glow.color.r,
            glow_g: mesh.glow.color.g,
            glow_b: mesh.glow.color.b,
            glow_a: mesh.glow.alpha,
        });
        if !pushed {
            break;
        }
    }
}
