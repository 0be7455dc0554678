fn main() {
    cynic_codegen::register_schema("library")
        .from_sdl_file("schemas/library.graphql")
        .expect("schemas/library.graphql should exist")
        .as_default()
        .expect("schema should be registered once");
}
