//! # IFCX Export
//!
//! One-shot exporter that assembles the sample architectural scene and
//! writes it to `output.ifcx`. The run is a single finite computation:
//! build the tree in memory, validate it as a whole, write it once.

use config::constants::{
    DEFAULT_LATITUDE_BANDS, DEFAULT_LONGITUDE_BANDS, DEFAULT_SPHERE_RADIUS,
};
use glam::DVec3;
use ifcx_doc::{Document, DocumentBuilder, DocumentError, Ident, NodeRef, Prim};
use ifcx_mesh::{generate_cuboid, generate_sphere};
use log::{error, info};
use serde_json::json;

/// Output artifact path.
const OUTPUT_PATH: &str = "output.ifcx";

/// Disclaimer carried at the head of the sample document.
const DISCLAIMER_TEXT: &str = "2024-11-12 update of the examples. (C) buildingSMART \
                               International. Published under CC BY-ND 4.0.";

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("export failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DocumentError> {
    let document = build_sample_document()?;
    document.write_to_file(OUTPUT_PATH)?;
    info!(
        "wrote {} with {} top-level nodes",
        OUTPUT_PATH,
        document.nodes().len()
    );
    Ok(())
}

/// Assembles the sample scene document.
///
/// Stable names (`WallMaterial`, `SurfaceMesh`, the spatial aliases) are
/// caller-supplied; every internal node gets a generated collision-free
/// identifier.
fn build_sample_document() -> Result<Document, DocumentError> {
    let mut builder = DocumentBuilder::new().disclaimer(DISCLAIMER_TEXT);

    // Main window element: an Xform with Void and Body mesh parts, each
    // inheriting from its own free-standing mesh class.
    let window_id = Ident::generate();
    let window_void_id = window_id.suffixed("_Void")?;
    let window_body_id = window_id.suffixed("_Body")?;
    builder = builder
        .node(
            Prim::class(window_id)
                .with_type("UsdGeom:Xform")
                .with_child(
                    Prim::def(Ident::new("Void")?)
                        .with_type("UsdGeom:Mesh")
                        .with_inherit(&window_void_id),
                )
                .with_child(
                    Prim::def(Ident::new("Body")?)
                        .with_type("UsdGeom:Mesh")
                        .with_inherit(&window_body_id),
                ),
        )
        .node(Prim::class(window_void_id).with_type("UsdGeom:Mesh"))
        .node(Prim::class(window_body_id).with_type("UsdGeom:Mesh"));

    // Spatial hierarchy: project → site → building → storey → space,
    // each level a class aliased into its parent by a def.
    let project_id = Ident::generate();
    let site_id = Ident::generate();
    let building_id = Ident::generate();
    let storey_id = Ident::generate();
    let space_id = Ident::generate();
    let sphere_id = Ident::generate();
    let thick_wall_id = Ident::generate();
    let surface_id = Ident::new("SurfaceMesh")?;

    builder = builder
        .node(
            Prim::class(project_id.clone())
                .with_type("UsdGeom:Xform")
                .with_child(Prim::def(Ident::new("My_Site")?).with_inherit(&site_id)),
        )
        .node(
            Prim::def(Ident::new("My_Project")?)
                .with_type("UsdGeom:Xform")
                .with_inherit(&project_id),
        )
        .node(
            Prim::class(site_id)
                .with_type("UsdGeom:Xform")
                .with_child(Prim::def(Ident::new("My_Building")?).with_inherit(&building_id))
                .with_child(Prim::def(Ident::new("Sphere")?).with_inherit(&sphere_id)),
        )
        .node(
            Prim::class(building_id)
                .with_type("UsdGeom:Xform")
                .with_child(Prim::def(Ident::new("My_Storey")?).with_inherit(&storey_id)),
        )
        .node(
            Prim::class(storey_id)
                .with_type("UsdGeom:Xform")
                .with_child(Prim::def(Ident::new("My_Space")?).with_inherit(&space_id))
                .with_child(Prim::def(Ident::new("ThickWall")?).with_inherit(&thick_wall_id))
                .with_child(Prim::def(Ident::new("Surface")?).with_inherit(&surface_id)),
        )
        .node(Prim::class(space_id).with_type("UsdGeom:Xform"));

    builder = add_thick_wall(builder, &thick_wall_id)?;
    builder = add_annotation_surface(builder, &surface_id)?;

    // Round sphere, tessellated at the default resolution.
    let sphere_mesh = generate_sphere(
        DEFAULT_LATITUDE_BANDS,
        DEFAULT_LONGITUDE_BANDS,
        DEFAULT_SPHERE_RADIUS,
    )?;
    info!(
        "sphere mesh: {} points, {} triangles",
        sphere_mesh.point_count(),
        sphere_mesh.triangle_count()
    );
    builder = builder
        .node(Prim::class(sphere_id.clone()).with_type("UsdGeom:Mesh"))
        .over_with_mesh(&sphere_id, &sphere_mesh)?;

    builder = add_wall_material(builder)?;

    builder.finish()
}

/// Adds the thick wall: a true solid with outer and inner shells, an IFC
/// class annotation, a property bag, and a material binding.
fn add_thick_wall(
    builder: DocumentBuilder,
    thick_wall_id: &Ident,
) -> Result<DocumentBuilder, DocumentError> {
    let body_id = thick_wall_id.suffixed("_Body")?;
    let material_ref = wall_material_ref()?;

    let outer_shell = generate_cuboid(DVec3::ZERO, DVec3::new(0.2, 3.0, 3.0))?;
    let inner_shell = generate_cuboid(
        DVec3::new(0.05, 0.05, 0.05),
        DVec3::new(0.15, 2.95, 2.95),
    )?;

    Ok(builder
        .node(
            Prim::class(thick_wall_id.clone())
                .with_type("UsdGeom:Xform")
                .with_child(
                    Prim::def(Ident::new("Body")?)
                        .with_type("UsdGeom:Mesh")
                        .with_inherit(&body_id),
                ),
        )
        .node(Prim::class(body_id.clone()).with_type("UsdGeom:Mesh"))
        .over_with_mesh(&body_id, &outer_shell)?
        .over_with_mesh(thick_wall_id, &inner_shell)?
        .node(Prim::over(thick_wall_id.clone()).with_attribute(
            "ifc5:class",
            json!({
                "code": "IfcWall",
                "uri": "https://identifier.buildingsmart.org/uri/buildingsmart/ifc/4.3/class/IfcWall"
            }),
        ))
        .node(
            Prim::over(thick_wall_id.clone())
                .with_attribute("ifc5:properties", json!({"IsExternal": 1})),
        )
        .node(Prim::over(thick_wall_id.clone()).with_attribute(
            "UsdShade:MaterialBindingAPI",
            json!({"material:binding": {"ref": material_ref.to_string()}}),
        )))
}

/// Adds the annotation surface: a thin slab (1mm extrusion) marked as an
/// IfcAnnotation, with two sample properties and the shared material.
fn add_annotation_surface(
    builder: DocumentBuilder,
    surface_id: &Ident,
) -> Result<DocumentBuilder, DocumentError> {
    let slab = generate_cuboid(DVec3::ZERO, DVec3::new(4.0, 0.001, 4.0))?;
    let material_ref = wall_material_ref()?;

    Ok(builder
        .node(Prim::class(surface_id.clone()).with_type("UsdGeom:Mesh"))
        .over_with_mesh(surface_id, &slab)?
        .node(
            Prim::over(surface_id.clone())
                .with_attribute(
                    "ifc5:class",
                    json!({
                        "code": "IfcAnnotation",
                        "uri": "https://identifier.buildingsmart.org/uri/buildingsmart/ifc/4.3/class/IfcAnnotation"
                    }),
                )
                .with_attribute("PredefinedType", json!("NOTDEFINED")),
        )
        .node(Prim::over(surface_id.clone()).with_attribute(
            "ifc5:properties",
            json!({"foo": "valueFoo", "bar": "valueBar"}),
        ))
        .node(Prim::over(surface_id.clone()).with_attribute(
            "UsdShade:MaterialBindingAPI",
            json!({"material:binding": {"ref": material_ref.to_string()}}),
        )))
}

/// Adds the shared wall material with its preview-surface shader.
fn add_wall_material(builder: DocumentBuilder) -> Result<DocumentBuilder, DocumentError> {
    Ok(builder.node(
        Prim::def(Ident::new("WallMaterial")?)
            .with_type("UsdShade:Material")
            .with_child(
                Prim::def(Ident::new("Shader")?)
                    .with_type("UsdShade:Shader")
                    .with_attribute("info:id", json!("UsdPreviewSurface"))
                    .with_attribute("inputs:diffuseColor", json!([0.8, 0.7, 0.6]))
                    .with_attribute("inputs:opacity", json!(1))
                    .with_attribute("outputs:surface", json!(null)),
            ),
    ))
}

/// Reference to the shared wall material, declared once and bound from
/// both the wall and the annotation surface.
fn wall_material_ref() -> Result<NodeRef, DocumentError> {
    Ok(NodeRef::from(Ident::new("WallMaterial")?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::MESH_ATTRIBUTE_KEY;
    use ifcx_doc::{MeshAttribute, Node, PrimKind};

    #[test]
    fn test_sample_document_builds() {
        let doc = build_sample_document().unwrap();
        assert!(doc.validate().is_ok());
        assert!(matches!(doc.nodes()[0], Node::Disclaimer(_)));
    }

    #[test]
    fn test_sample_document_embeds_sphere_geometry() {
        let doc = build_sample_document().unwrap();
        let expected_points =
            ((DEFAULT_LATITUDE_BANDS - 1) * DEFAULT_LONGITUDE_BANDS + 2) as usize;

        let sphere_block = doc
            .nodes()
            .iter()
            .filter_map(Node::as_prim)
            .filter_map(|prim| prim.attributes.get(MESH_ATTRIBUTE_KEY))
            .map(|value| MeshAttribute::from_value(value).unwrap())
            .find(|block| block.points.len() == expected_points);
        assert!(sphere_block.is_some(), "sphere geometry block missing");
        sphere_block.unwrap().validate().unwrap();
    }

    #[test]
    fn test_sample_document_round_trips() {
        let doc = build_sample_document().unwrap();
        let json = doc.to_json_string().unwrap();
        let back = Document::from_json_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_sample_document_has_shared_material() {
        let doc = build_sample_document().unwrap();
        let material = doc
            .nodes()
            .iter()
            .filter_map(Node::as_prim)
            .find(|prim| prim.name.as_str() == "WallMaterial")
            .expect("WallMaterial must be declared");
        assert_eq!(material.kind, PrimKind::Def);
        assert_eq!(material.type_tag.as_deref(), Some("UsdShade:Material"));
    }

    #[test]
    fn test_generated_identifiers_differ_between_runs() {
        let a = build_sample_document().unwrap();
        let b = build_sample_document().unwrap();
        // Internal ids are random, so the documents differ while both
        // remain structurally valid.
        assert_ne!(a, b);
    }
}
