use weft_core::BuildContext;

fn main() {
  println!("\n=== weft descriptor smoke check ===");
  match BuildContext::builder().build() {
    Ok(context) => {
      println!(
        "Descriptor loaded: {} content glob(s), {} plugin(s), container centered: {}",
        context.content_globs().len(),
        context.plugin_order().len(),
        context.container_centered()
      );
      for plugin in context.plugin_order() {
        println!("  plugin: {plugin}");
      }
    }
    Err(e) => println!("Descriptor load failed: {e}"),
  }
}
