#[cfg(feature = "compile-shaders")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use glob::glob;
    use spirv_builder::{MetadataPrintout, SpirvBuilder};

    for path in glob("../shaders/*")?.filter_map(Result::ok) {
        SpirvBuilder::new(path.as_path().as_os_str(), "spirv-unknown-spv1.5")
            .print_metadata(MetadataPrintout::Full)
            .build()?;
    }
    Ok(())
}

#[cfg(not(feature = "compile-shaders"))]
fn main() {}
