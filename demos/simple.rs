use covellipse::compute;

fn main() -> Result<(), covellipse::Error> {
    let x = [2.1, 2.9, 4.2, 5.1, 5.8, 7.0];
    let y = [1.0, 1.8, 2.1, 3.2, 3.9, 4.1];

    // Two-standard-deviation confidence region
    let params = compute(&x, &y, 2.0)?;

    let (cx, cy) = params.center();
    println!("center: ({cx:.3}, {cy:.3})");
    println!("width: {:.3}", params.width());
    println!("height: {:.3}", params.height());
    println!("rotation: {:.3} rad", params.rotation());

    Ok(())
}
