use anyhow::Result;
use vergen_gix::{BuildBuilder, Emitter, GixBuilder};

fn main() -> Result<()> {
    // Embedded dashboard pages are compiled into the daemon
    println!("cargo:rerun-if-changed=assets");

    let build = BuildBuilder::default().build_timestamp(true).build()?;
    let git = GixBuilder::default().sha(true).branch(true).build()?;

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&git)?
        .emit()?;
    Ok(())
}
