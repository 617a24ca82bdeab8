mod lookup_host;

pub use lookup_host::LookupHostUseCase;
