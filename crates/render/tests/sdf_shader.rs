fn validate_shader(src: &str) -> naga::Module {
    let module = match naga::front::wgsl::parse_str(src) {
        Ok(m) => m,
        Err(e) => panic!("WGSL parsing error:\n{}", e.emit_to_string(src)),
    };
    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    if let Err(e) = validator.validate(&module) {
        panic!("WGSL validation error:\n{}", e.emit_to_string(src));
    }
    module
}

#[test]
fn compile_sdf_shader() {
    validate_shader(include_str!("../src/sdf.wgsl"));
}

#[test]
fn sdf_shader_exposes_both_entry_points() {
    let module = validate_shader(include_str!("../src/sdf.wgsl"));
    let names: Vec<&str> = module.entry_points.iter().map(|ep| ep.name.as_str()).collect();
    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_main"));
}
