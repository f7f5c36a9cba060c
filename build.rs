use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // VERGEN_BUILD_DATE, VERGEN_CARGO_TARGET_TRIPLE, VERGEN_RUSTC_SEMVER
    EmitBuilder::builder()
        .build_date()
        .cargo_target_triple()
        .rustc_semver()
        .emit()?;
    Ok(())
}
