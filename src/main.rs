use clap::Parser;
use git_insights::Error;
use git_insights_app::Args;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let json = args.json;

    let report = git_insights_app::calculate_profile_stats(args).await?;
    println!("{}", git_insights_app::render(&report, json)?);

    Ok(())
}
