use env_logger::{Builder, Env};
use ndarray::s;
use optiseed::{sampling, Sampling};

fn main() {
    let env = Env::new().filter_or("OPTISEED_LOG", "info");
    let mut builder = Builder::from_env(env);
    let builder = builder.target(env_logger::Target::Stdout);
    builder.try_init().ok();

    let (n, dims, seed) = (8, 2, Some(123));
    let bounds = [(0., 1.), (-10., 10.)];

    for method in Sampling::ALL {
        println!("*** {} samples (first 5 rows)", method.name());
        match sampling::<f64>(method, n, dims, seed, None) {
            Ok(samples) => println!("{}\n", samples.slice(s![..5, ..])),
            Err(err) => println!("Failed to generate samples: {err}\n"),
        }
    }

    println!("*** Sobol samples within");
    println!("{bounds:?}");
    match sampling::<f64>(Sampling::Sobol, n, dims, seed, Some(&bounds[..])) {
        Ok(samples) => println!("{samples}\n"),
        Err(err) => println!("Failed to generate samples: {err}\n"),
    }
}
