use folio::{DocumentAssembler, PipelineError};

/// Writes `Pixel_Vault_Abstract.pdf` to the current directory.
fn main() -> Result<(), PipelineError> {
    env_logger::init();
    DocumentAssembler::new().generate()
}
