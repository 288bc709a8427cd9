pub mod cross_references;
