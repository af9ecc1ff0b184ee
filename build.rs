use std::{env, error::Error, fs, path::PathBuf};

const MEMORY_POOL_SIZE_VAR: &str = "UNIT_TEST_MEMORY_POOL_SIZE";
const EXPECTATION_BUFFER_SIZE_VAR: &str = "UNIT_TEST_EXPECTATION_BUFFER_SIZE";

const DEFAULT_MEMORY_POOL_SIZE: usize = 16 * 1024;

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={}", MEMORY_POOL_SIZE_VAR);
    println!("cargo:rerun-if-env-changed={}", EXPECTATION_BUFFER_SIZE_VAR);

    // one evaluated expression holds two operands plus an operator; wider pointers mean wider
    // `{:?}` output for addresses and `usize`s
    let default_buffer_size = match env::var("CARGO_CFG_TARGET_POINTER_WIDTH")?.as_str() {
        "64" => 192,
        _ => 128,
    };

    let pool_size = size_from_env(MEMORY_POOL_SIZE_VAR, DEFAULT_MEMORY_POOL_SIZE)?;
    let buffer_size = size_from_env(EXPECTATION_BUFFER_SIZE_VAR, default_buffer_size)?;

    if pool_size == 0 {
        return Err(format!("`{}` must be greater than zero", MEMORY_POOL_SIZE_VAR).into());
    }
    if buffer_size == 0 {
        return Err(format!("`{}` must be greater than zero", EXPECTATION_BUFFER_SIZE_VAR).into());
    }

    let out = &PathBuf::from(env::var("OUT_DIR")?);
    fs::write(
        out.join("config.rs"),
        format!(
            "/// Size in bytes of the arena that holds the fixture of the running test.\n\
             pub const MEMORY_POOL_SIZE: usize = {};\n\
             /// Size in bytes of the on-stack buffer used to format one evaluated expression.\n\
             pub const EXPECTATION_BUFFER_SIZE: usize = {};\n",
            pool_size, buffer_size
        ),
    )?;

    Ok(())
}

fn size_from_env(var: &str, default: usize) -> Result<usize, Box<dyn Error>> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| format!("`{}={}` is not a valid size: {}", var, value, e).into()),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(e.into()),
    }
}
