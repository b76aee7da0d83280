//! Example demonstrating recovery from a truncated project file

use flipbook_core::{
    decoder::salvage_store,
    encoder::encode_store,
    Frame, FrameStore,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Flipbook Truncated Project Recovery Example\n");

    // Step 1: Build a clean project with 10 frames
    println!("Step 1: Creating 10 frames...");
    let mut store = FrameStore::new();

    for i in 1..=10 {
        store.push(Frame::new(
            format!("frame-{}", i),
            100,
            format!("frames/frame-{:03}.png", i),
        )?);
    }

    let mut data = encode_store(&store)?.to_vec();
    let original_size = data.len();
    println!("Encoded clean project: {} bytes\n", original_size);

    // Step 2: Simulate a save that died mid-write
    println!("Step 2: Simulating a crashed save...");
    data.truncate(original_size * 2 / 3);
    println!("Truncated project: {} bytes\n", data.len());

    // Step 3: Salvage what remains
    println!("Step 3: Salvaging...");
    let (recovered, damage) = salvage_store(&data);

    println!("Salvage Results:");
    println!("  Frames recovered:  {}", recovered.len());
    if let Some(err) = damage {
        println!("  Stopped at:        {}", err);
    }

    println!("\nRecovered frames:");
    for (i, frame) in recovered.iter().enumerate() {
        println!("  {}: {} ({} ms, {})", i + 1, frame.name, frame.duration, frame.path);
    }

    println!(
        "\n✓ Recovered {}/{} frames from the truncated file",
        recovered.len(),
        store.len()
    );

    Ok(())
}
