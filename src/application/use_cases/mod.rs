/// Use cases module containing application business logic orchestration
mod format_sbom;

pub use format_sbom::FormatSbomUseCase;
