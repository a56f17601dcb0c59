use std::io::Result;

fn main() -> Result<()> {
    #[cfg(feature = "regenerate")]
    prost_build::Config::new()
        .out_dir("src/generated")
        .compile_protos(&["proto/pgpbridge.proto"], &["proto/"])?;

    println!("cargo:rerun-if-changed=proto/pgpbridge.proto");
    Ok(())
}
