fn main() {
    // Collect information about the build (version, git hash etc.) for metadata.toml
    built::write_built_file().expect("Failed to acquire build-time information");
}
