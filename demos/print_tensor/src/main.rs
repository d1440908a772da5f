use argh::FromArgs;
use minitensor::Tensor;

#[derive(FromArgs)]
/// Build a matrix from nested numeric data and print it.
struct Args {
    /// matrix rows separated by ';', values by ',' (e.g. "1,2;3,4")
    #[argh(
        option,
        short = 'm',
        default = "String::from(\"1,2,3,4;1,2,3,4;1,2,3,4\")"
    )]
    matrix: String,

    /// scalar to broadcast-add to every element before printing
    #[argh(option, short = 'a')]
    add: Option<f32>,
}

fn parse_rows(text: &str) -> Result<Vec<Vec<f32>>, std::num::ParseFloatError> {
    text.split(';')
        .map(|row| row.split(',').map(|v| v.trim().parse::<f32>()).collect())
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let tensor = Tensor::from_rows(parse_rows(&args.matrix)?)?;
    log::info!(
        "shape: {:?}, strides: {:?}",
        tensor.shape(),
        tensor.strides()
    );

    let tensor = match args.add {
        Some(value) => minitensor::add(&tensor, &Tensor::scalar(value))?,
        None => tensor,
    };

    println!("{tensor}");

    Ok(())
}
