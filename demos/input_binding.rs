//! Storing a controller binding as a single settings string.
//!
//! Run with: cargo run --example input_binding

use param_package::{params, ParamPackage};

fn main() {
    // A controller binding built from nested packages and lists
    let stick = params! {
        "engine": "sdl",
        "axis_x": 0,
        "axis_y": 1,
        "deadzone": 0.15f32,
    };
    let buttons = vec![
        params! { "engine": "sdl", "button": 0 },
        params! { "engine": "keyboard", "code": 65, "modifiers": vec![1, 2] },
    ];

    let mut binding = ParamPackage::new();
    binding.set("name", "Player 1: Pro, Controller");
    binding.set("stick", &stick);
    binding.set("buttons", buttons);

    let serialized = binding.serialize();
    println!("Serialized:\n  {}\n", serialized);

    // Read it back as a settings backend would hand it to us
    let decoded: ParamPackage = serialized.parse().unwrap_or_default();
    println!("Name: {}", decoded.get("name", String::new()));

    let stick = decoded.get("stick", ParamPackage::new());
    println!("Deadzone: {}", stick.get("deadzone", 0.0f32));

    for (index, button) in decoded
        .get("buttons", Vec::<ParamPackage>::new())
        .iter()
        .enumerate()
    {
        println!("Button {}: {}", index, button);
    }

    // Missing or mistyped values fall back to the default
    println!("Port: {}", decoded.get("port", 0));
    println!("Name as int: {}", decoded.get("name", -1));
}
