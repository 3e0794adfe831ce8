fn main() {
    let config = slint_build::CompilerConfiguration::new()
        .with_include_paths(vec!["ui".into()]);
    slint_build::compile_with_config("ui/app.slint", config)
        .expect("Failed to compile the slint UI. Check the syntax in ui/app.slint.");
}
