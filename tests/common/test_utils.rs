#![allow(dead_code)]

use cgmath::{Matrix4, Vector3};
use orrery::data_structures::description::Element;

/// Per-test logging setup; safe to call from every test.
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn assert_close(a: f32, b: f32) {
    assert!(
        (a - b).abs() < 1e-4,
        "expected {} to be close to {}",
        a,
        b
    );
}

pub(crate) fn assert_vec3_close(a: Vector3<f32>, b: Vector3<f32>) {
    assert!(
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4 && (a.z - b.z).abs() < 1e-4,
        "expected {:?} to be close to {:?}",
        a,
        b
    );
}

pub(crate) fn assert_matrix_close(a: Matrix4<f32>, b: Matrix4<f32>) {
    for col in 0..4 {
        for row in 0..4 {
            assert!(
                (a[col][row] - b[col][row]).abs() < 1e-4,
                "matrices differ at column {} row {}:\n{:?}\nvs\n{:?}",
                col,
                row,
                a,
                b
            );
        }
    }
}

/// `<name x=".." y=".." z="..">`
pub(crate) fn xyz_element(name: &str, x: f32, y: f32, z: f32) -> Element {
    Element::new(name)
        .with_attribute("x", &x.to_string())
        .with_attribute("y", &y.to_string())
        .with_attribute("z", &z.to_string())
}

/// A path-animated `<translate time=".." align="..">` with its points.
pub(crate) fn path_translate(period: f32, align: bool, points: &[[f32; 3]]) -> Element {
    let mut element = Element::new("translate")
        .with_attribute("time", &period.to_string())
        .with_attribute("align", if align { "true" } else { "false" });
    for [x, y, z] in points {
        element = element.with_child(xyz_element("point", *x, *y, *z));
    }
    element
}

pub(crate) fn model_ref(file: &str) -> Element {
    Element::new("model").with_attribute("file", file)
}

/// `<group>` with a `<transform>` block, a `<models>` block and child groups.
pub(crate) fn group(
    transforms: Vec<Element>,
    models: Vec<Element>,
    children: Vec<Element>,
) -> Element {
    let mut element = Element::new("group");
    if !transforms.is_empty() {
        let mut block = Element::new("transform");
        block.children = transforms;
        element = element.with_child(block);
    }
    if !models.is_empty() {
        let mut block = Element::new("models");
        block.children = models;
        element = element.with_child(block);
    }
    for child in children {
        element = element.with_child(child);
    }
    element
}

pub(crate) fn world_with(groups: Vec<Element>) -> Element {
    let mut world = Element::new("world");
    for group in groups {
        world = world.with_child(group);
    }
    world
}

/// Four corners of a unit square in the XZ plane, a minimal closed path.
pub(crate) fn square_path() -> [[f32; 3]; 4] {
    [
        [1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
        [-1.0, 0.0, 0.0],
        [0.0, 0.0, -1.0],
    ]
}
