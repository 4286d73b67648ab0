use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use sbox_analysis::analysis::avalanche::avalanche_matrix;
use sbox_analysis::analysis::differential::difference_distribution_table;
use sbox_analysis::{Metric, SboxTable, evaluate, evaluate_all};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --------------------------------------------------------
    // 0) Тождественная таблица: вырожденный случай
    // --------------------------------------------------------
    println!("=== Identity table ===");
    let identity = SboxTable::identity(8);
    print!("{}", evaluate_all(&identity));

    // --------------------------------------------------------
    // 1) Random permutation table
    // --------------------------------------------------------
    println!("\n=== Random 8-bit permutation ===");
    let mut rng = StdRng::seed_from_u64(0x1234_5678);
    let mut values: Vec<u16> = (0..256).collect();
    values.shuffle(&mut rng);
    let table = SboxTable::new(values)?;
    print!("{}", evaluate_all(&table));

    // --------------------------------------------------------
    // 2) Subset selection
    // --------------------------------------------------------
    println!("\n=== Subset: LAP + NL only ===");
    let report = evaluate(
        &table,
        &[Metric::LinearApproximation, Metric::Nonlinearity],
    );
    print!("{report}");

    // --------------------------------------------------------
    // 3) Intermediate matrices
    // --------------------------------------------------------
    println!("\n=== Avalanche matrix ===");
    for row in avalanche_matrix(&table) {
        let cells: Vec<String> = row.iter().map(|p| format!("{p:.4}")).collect();
        println!("  {}", cells.join(" "));
    }

    let ddt = difference_distribution_table(&table);
    let max_cell = ddt[1..].iter().flatten().max().unwrap();
    println!("\nDDT max cell (dx != 0): {max_cell}");

    // --------------------------------------------------------
    // 4) Rejected inputs
    // --------------------------------------------------------
    println!("\n=== Validation ===");
    let err = SboxTable::new(vec![0u16; 100]).unwrap_err();
    println!("length 100 -> {err}");
    let err = SboxTable::new(vec![0, 1, 2, 99]).unwrap_err();
    println!("bad entry  -> {err}");

    Ok(())
}
