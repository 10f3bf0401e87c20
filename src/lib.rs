// Theme bootstrap library - exposes all core modules for testing

pub mod application;
pub mod assets;
pub mod boot;
pub mod config;
pub mod manifest;
pub mod registrar;
