use kakuro::generate_board;

const WIDTH: usize = 10;
const HEIGHT: usize = 10;
const GAP_FRACTION: f64 = 0.4;

fn main() -> anyhow::Result<()> {
    let board = generate_board(WIDTH, HEIGHT, GAP_FRACTION)?;
    print!("{board}");
    Ok(())
}
