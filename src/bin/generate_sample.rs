use std::error::Error;

/// Column layout of the backing file, in canonical order.
const HEADER: [&str; 12] = [
    "name",
    "density_(kg/m^3)",
    "UTS_(MPa)",
    "cost_per_kg_($)",
    "thermal_conductivity_(W/mK)",
    "maximum_temperature_(C)",
    "young_modulus_(GPa)",
    "thermal_capacity_(J/kgK)",
    "tensile_strength_yield_(MPa)",
    "Elongation_(%)",
    "recycle_fraction_(%)",
    "type",
];

/// Representative property values for a starter catalog:
/// (name, density, UTS, cost, conductivity, max temp, Young's modulus,
///  thermal capacity, yield strength, elongation, recycle fraction, type)
#[rustfmt::skip]
const MATERIALS: &[(&str, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64, &str)] = &[
    ("Aluminium 6061",      2700.0,  310.0,  2.5, 167.0,  200.0,  69.0,  896.0,  276.0, 12.0, 95.0, "Metals"),
    ("Copper",              8960.0,  220.0,  9.0, 401.0,  300.0, 117.0,  385.0,   70.0, 45.0, 90.0, "Metals"),
    ("Mild Steel",          7850.0,  400.0,  0.8,  50.0,  500.0, 200.0,  450.0,  250.0, 20.0, 85.0, "Metals"),
    ("Stainless Steel 304", 8000.0,  505.0,  4.5,  16.0,  870.0, 193.0,  500.0,  215.0, 40.0, 90.0, "Metals"),
    ("Titanium Grade 2",    4510.0,  485.0, 35.0,  17.0,  400.0, 105.0,  523.0,  380.0, 20.0, 60.0, "Metals"),
    ("Magnesium AZ31",      1770.0,  260.0,  6.0,  96.0,  150.0,  45.0, 1020.0,  200.0, 15.0, 40.0, "Metals"),
    ("Zinc",                7140.0,  110.0,  3.0, 116.0,  120.0,  97.0,  390.0,   75.0, 30.0, 70.0, "Metals"),
    ("Brass C260",          8530.0,  370.0,  7.5, 120.0,  200.0, 110.0,  380.0,  140.0, 40.0, 85.0, "Alloys"),
    ("Phosphor Bronze",     8800.0,  350.0,  9.5,  60.0,  250.0, 103.0,  380.0,  160.0, 20.0, 80.0, "Alloys"),
    ("Inconel 718",         8190.0, 1240.0, 55.0,  11.0,  980.0, 205.0,  435.0, 1000.0, 21.0, 45.0, "Alloys"),
    ("ABS",                 1050.0,   40.0,  2.0,   0.17,  80.0,   2.3, 1400.0,   40.0, 25.0, 30.0, "Plastics"),
    ("PVC Rigid",           1380.0,   52.0,  1.2,   0.19,  60.0,   3.0,  900.0,   45.0, 40.0, 25.0, "Plastics"),
    ("Nylon 6",             1140.0,   75.0,  3.2,   0.25, 120.0,   2.7, 1700.0,   60.0, 50.0, 30.0, "Plastics"),
    ("PEEK",                1320.0,  100.0, 90.0,   0.25, 250.0,   3.6, 1340.0,   97.0, 30.0, 20.0, "Plastics"),
    ("Polycarbonate",       1200.0,   65.0,  3.5,   0.2,  115.0,   2.4, 1250.0,   62.0, 80.0, 35.0, "Plastics"),
    ("Alumina 99%",         3900.0,  300.0, 12.0,  30.0, 1700.0, 370.0,  880.0,  300.0,  0.0, 10.0, "Ceramics"),
    ("Silicon Carbide",     3210.0,  390.0, 18.0, 120.0, 1600.0, 410.0,  750.0,  390.0,  0.0,  5.0, "Ceramics"),
    ("Zirconia",            6050.0,  750.0, 40.0,   2.5, 1500.0, 210.0,  460.0,  750.0,  0.0,  5.0, "Ceramics"),
    ("CFRP Laminate",       1600.0,  600.0, 60.0,   7.0,  150.0,  70.0, 1050.0,  570.0,  1.5, 10.0, "Composites"),
    ("GFRP Laminate",       1900.0,  350.0, 12.0,   0.5,  140.0,  25.0, 1200.0,  330.0,  2.5, 15.0, "Composites"),
];

fn main() -> Result<(), Box<dyn Error>> {
    let output_path = "materials_data.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    writer.write_record(HEADER)?;
    for &(name, density, uts, cost, k, t_max, modulus, capacity, yield_strength, elongation, recycle, material_type) in
        MATERIALS
    {
        writer.write_record(&[
            name.to_string(),
            density.to_string(),
            uts.to_string(),
            cost.to_string(),
            k.to_string(),
            t_max.to_string(),
            modulus.to_string(),
            capacity.to_string(),
            yield_strength.to_string(),
            elongation.to_string(),
            recycle.to_string(),
            material_type.to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {} materials to {output_path}", MATERIALS.len());
    Ok(())
}
