use std::error::Error;

use vecdk::vec_adapter::*;
use vecdk::vec_model::*;

fn main() -> Result<(), Box<dyn Error>> {
    // polar (r, angle) inputs, angles in degrees
    for (r, angle) in [(3.0, 30.0), (1.0, 135.0), (-2.0, 45.0)] {
        let v = Adapter2D::new(r, angle).convert();
        println!("polar ({}, {}) -> {:?}, abs {}", r, angle, v.components(), v.abs());
    }

    // spherical (r, psi, fi), psi measured from the z axis
    let sphere = Adapter3D::new(2.0, 30.0, 30.0).convert();
    println!("spherical (2, 30, 30) -> {:?}", sphere.components());
    println!("angle {:?}", sphere.angle()?);

    // back and forth through the polar description
    let v = Vector2D::new(3.0, 4.0);
    let polar = v.to_polar()?;
    println!(
        "{:?} -> polar ({}, {}) -> {:?}",
        v.components(),
        polar.r,
        polar.angle,
        polar.convert().components()
    );

    // a vector on the y axis has no reference axis
    if let Err(err) = Vector2D::new(0.0, 2.0).angle() {
        eprintln!("{}", err);
    }

    let cross = Vector3D::new(1.0, 1.0, 2.0).cross_multiplication(&sphere)?;
    println!("(1, 1, 2) x {:?} = {:?}", sphere.components(), cross.components());
    Ok(())
}
