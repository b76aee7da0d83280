//! Basic project-building example

use flipbook_core::{encoder::save_project, Frame, FrameStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Flipbook Project Building Example\n");

    let mut store = FrameStore::new();

    for i in 1..=5 {
        let frame = Frame::new(
            format!("shot-{}", i),
            120,
            format!("shots/shot-{:03}.png", i),
        )?;
        println!("Frame {}: {} bytes on disk", i, frame.encoded_size());
        store.push(frame);
    }

    // rearrange: last shot becomes the opener
    store.move_to("shot-5", 1)?;

    // slow the whole movie down
    store.set_all_durations(200);

    save_project(&store, "example_movie.flip")?;

    println!("\nWrote {} frame(s) to example_movie.flip", store.len());
    println!("Use 'flipbook list --project example_movie.flip' to read it back");

    Ok(())
}
