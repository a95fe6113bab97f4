//! Model assets: fetch the binary glTF files and flatten them into plain
//! vertex/index arrays for the renderer.

use anyhow::anyhow;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

/// Fetch a `.glb` over HTTP and parse it.
pub async fn fetch_model(url: &str) -> anyhow::Result<MeshData> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {url}: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("fetch {url}: not a Response: {:?}", e))?;
    if !response.ok() {
        return Err(anyhow!("fetch {url}: HTTP {}", response.status()));
    }
    let buffer = JsFuture::from(
        response
            .array_buffer()
            .map_err(|e| anyhow!("array_buffer {url}: {:?}", e))?,
    )
    .await
    .map_err(|e| anyhow!("array_buffer {url}: {:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mesh = parse_glb(&bytes)?;
    log::info!(
        "[scene] {url}: {} vertices, {} indices",
        mesh.positions.len(),
        mesh.indices.len()
    );
    Ok(mesh)
}

/// Flatten every primitive of a GLB into one triangle list. The models are
/// single objects authored at the origin, so node transforms are not applied.
pub fn parse_glb(bytes: &[u8]) -> anyhow::Result<MeshData> {
    let gltf = gltf::Gltf::from_slice(bytes)?;
    let blob = gltf
        .blob
        .as_deref()
        .ok_or_else(|| anyhow!("GLB has no binary chunk"))?;

    let mut mesh = MeshData {
        positions: Vec::new(),
        normals: Vec::new(),
        indices: Vec::new(),
    };
    for m in gltf.document.meshes() {
        for primitive in m.primitives() {
            let reader = primitive.reader(|buffer| match buffer.source() {
                gltf::buffer::Source::Bin => Some(blob),
                gltf::buffer::Source::Uri(_) => None,
            });
            let Some(positions) = reader.read_positions() else {
                continue;
            };
            let base = mesh.positions.len() as u32;
            let start = mesh.positions.len();
            mesh.positions.extend(positions);
            let added = mesh.positions.len() - start;

            match reader.read_normals() {
                Some(normals) => mesh.normals.extend(normals.take(added)),
                // Models without normals still render, just unshaded.
                None => mesh.normals.extend(std::iter::repeat([0.0, 0.0, 1.0]).take(added)),
            }
            // Pad if the normal accessor was shorter than the positions.
            while mesh.normals.len() < mesh.positions.len() {
                mesh.normals.push([0.0, 0.0, 1.0]);
            }

            match reader.read_indices() {
                Some(indices) => mesh.indices.extend(indices.into_u32().map(|i| base + i)),
                None => mesh.indices.extend(base..base + added as u32),
            }
        }
    }
    if mesh.positions.is_empty() {
        return Err(anyhow!("GLB contains no geometry"));
    }
    Ok(mesh)
}
