//! Print a built-in skeleton definition as a tree.
//!
//! ```text
//! cargo run -p pose-skeleton-core --example print_definition -- smplx
//! ```

use pose_skeleton_core::{get_definition, Role};

fn main() {
    let name = std::env::args().nth(1).unwrap_or_else(|| "optitrack".to_string());
    let def = match get_definition(&name) {
        Ok(def) => def,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    print!("{def}");
    println!();
    println!("canonical roles:");
    for role in Role::ALL {
        if let Some(joint) = def.name_of_role(role) {
            println!("  {role:<11} -> {joint}");
        }
    }
}
