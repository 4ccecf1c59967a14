//! Integration tests for the public generation and theming contract.

use swirl::prelude::*;

#[test]
fn default_field_buffers_are_index_aligned() {
    let field = ParticleField::generate(&GalaxyParams::default());
    assert_eq!(field.len(), 30_000);
    assert_eq!(field.positions.len(), 90_000);
    assert_eq!(field.colors.len(), 90_000);
}

#[test]
fn default_field_stays_inside_scattered_disk() {
    let params = GalaxyParams::default();
    let field = ParticleField::generate(&params);

    let bound = params.radius * (1.0 + params.randomness);
    for chunk in field.positions.chunks_exact(3) {
        let xz = (chunk[0] * chunk[0] + chunk[2] * chunk[2]).sqrt();
        // Worst case: base radius just under `radius` plus full scatter on
        // both horizontal axes
        assert!(xz <= bound * std::f32::consts::SQRT_2);
        assert!(chunk[1].abs() <= params.radius * params.randomness * 0.5);
    }
}

#[test]
fn default_parameters_match_stock_galaxy() {
    let params = GalaxyParams::default();
    assert_eq!(params.count, 30_000);
    assert_eq!(params.branches, 3);
    assert_eq!(params.radius, 400.0);
    assert_eq!(params.inside_color, Color::parse("#EF553B").unwrap());
    assert_eq!(params.outside_color, Color::parse("#636EFA").unwrap());
}

#[test]
fn background_resolution_matrix() {
    let transparent = ThemeData::with_background("transparent");
    assert_eq!(
        Background::resolve(Some(&transparent), None),
        Background::Transparent
    );

    let solid = ThemeData::with_background("#112233");
    assert_eq!(
        Background::resolve(Some(&solid), None),
        Background::Solid(Color::parse("#112233").unwrap())
    );

    assert_eq!(
        Background::resolve(None, None),
        Background::Solid(Color::parse("#050505").unwrap())
    );

    assert_eq!(
        Background::resolve(None, Some("transparent")),
        Background::Transparent
    );
}

#[test]
fn host_json_record_deserializes() {
    let data = ThemeData::from_json(r##"{"threejs":{"backgroundColor":"#050505"}}"##).unwrap();
    assert_eq!(
        Background::resolve(Some(&data), None),
        Background::Solid(Color::parse("#050505").unwrap())
    );
}
