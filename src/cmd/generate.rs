use anyhow::Result;

use navgen::config::OutputFormat;
use navgen::{BrowserFamily, Filter, NavigatorGenerator, NavigatorRecord, PlatformFamily};

/// Resolved options shared by `ua` and `navigator`.
pub struct GenerateOptions {
    pub platform: Filter<PlatformFamily>,
    pub browser: Filter<BrowserFamily>,
    pub count: usize,
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl GenerateOptions {
    fn generator(&self) -> NavigatorGenerator {
        match self.seed {
            Some(seed) => NavigatorGenerator::with_seed(seed),
            None => NavigatorGenerator::from_entropy(),
        }
    }
}

pub fn cmd_user_agent(opts: &GenerateOptions) -> Result<()> {
    let mut generator = opts.generator();
    for _ in 0..opts.count {
        let ua = generator.user_agent(&opts.platform, &opts.browser)?;
        match opts.format {
            OutputFormat::Text => println!("{ua}"),
            OutputFormat::Json => println!("{}", serde_json::to_string(&ua)?),
        }
    }
    Ok(())
}

pub fn cmd_navigator(opts: &GenerateOptions) -> Result<()> {
    let mut generator = opts.generator();
    for i in 0..opts.count {
        let nav = generator.navigator(&opts.platform, &opts.browser)?;
        match opts.format {
            OutputFormat::Text => {
                if i > 0 {
                    println!();
                }
                print_record(&nav);
            }
            OutputFormat::Json => println!("{}", serde_json::to_string(&nav)?),
        }
    }
    Ok(())
}

fn print_record(nav: &NavigatorRecord) {
    println!("name:       {}", nav.name);
    println!("version:    {}", nav.version);
    println!("os:         {}", nav.os);
    println!("platform:   {}", nav.platform);
    println!("oscpu:      {}", nav.oscpu);
    println!("appversion: {}", nav.appversion);
    println!("user_agent: {}", nav.user_agent);
}
