mod resolver;

pub use resolver::ExecutableResolver;
