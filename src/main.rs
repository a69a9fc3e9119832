use std::process;

use vecdk::vec_adapter::{Adapter2D, Adapter3D, VectorAdapter2D, VectorAdapter3D};
use vecdk::vec_model::{Vector, Vector2D, Vector3D};
use vecdk::VectorError;

fn two_dimensional() -> Result<(), VectorError> {
    println!("two dimensional vectors\n");

    let vector2d_1 = Vector2D::new(1.0, 2.0);
    let vector2d_2 = Vector2D::new(1.0, 5.0);

    println!(
        "Components vector2d_1: {:?} | Components vector2d_2: {:?}",
        vector2d_1.components(),
        vector2d_2.components()
    );
    println!(
        "Abs vector2d_1:        {} | Abs vector2d_2:        {}",
        vector2d_1.abs(),
        vector2d_2.abs()
    );
    println!(
        "Angle vector2d_1:      {:?} | Angle vector2d_2:      {:?}",
        vector2d_1.angle()?,
        vector2d_2.angle()?
    );
    println!(
        "\nDot product of vector2d_1, vector2d_2: {}",
        vector2d_1.cdot(&vector2d_2)?
    );
    Ok(())
}

fn three_dimensional() -> Result<(), VectorError> {
    println!("three dimensional vectors\n");

    let vector3d_1 = Vector3D::new(1.0, 1.0, 2.0);
    let vector3d_2 = Vector3D::new(1.0, 4.0, 5.0);

    println!(
        "Components vector3d_1: {:?} | Components vector3d_2: {:?}",
        vector3d_1.components(),
        vector3d_2.components()
    );
    println!(
        "Abs vector3d_1:        {} | Abs vector3d_2:        {}",
        vector3d_1.abs(),
        vector3d_2.abs()
    );
    println!(
        "Angle vector3d_1:      {:?} | Angle vector3d_2:      {:?}",
        vector3d_1.angle()?,
        vector3d_2.angle()?
    );
    println!(
        "\nDot product of vector3d_1, vector3d_2: {}",
        vector3d_1.cdot(&vector3d_2)?
    );
    println!(
        "\nCross multiplication: {:?}",
        vector3d_1.cross_multiplication(&vector3d_2)?.components()
    );
    Ok(())
}

fn convert_coordinates() {
    println!("convert coordinates\n");

    let adapter_2d = Adapter2D::new(3.0, 30.0);
    println!(
        "From polar to cartesian:     {:?}",
        adapter_2d.convert().components()
    );

    let adapter_3d = Adapter3D::new(2.0, 30.0, 30.0);
    println!(
        "From spherical to cartesian: {:?}",
        adapter_3d.convert().components()
    );
}

fn main() {
    let separator = "=".repeat(80);

    println!("{}", separator);
    if let Err(err) = two_dimensional() {
        eprintln!("two dimensional vectors error: {}", err);
        process::exit(1);
    }

    println!("\n{}", separator);
    if let Err(err) = three_dimensional() {
        eprintln!("three dimensional vectors error: {}", err);
        process::exit(1);
    }

    println!("\n{}", separator);
    convert_coordinates();
}
