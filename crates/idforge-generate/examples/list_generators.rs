use idforge_generate::generators::GeneratorRegistry;

fn main() {
    let registry = GeneratorRegistry::new();
    for id in registry.ids() {
        let fields = registry
            .generator(id)
            .map(|generator| generator.field_names().join(", "))
            .unwrap_or_default();
        println!("{id}: {fields}");
    }
}
