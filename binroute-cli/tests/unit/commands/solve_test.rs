use super::*;
use tempfile::TempDir;

const STOPS_REQUEST_PATH: &str = "data/request.stops.json";
const STATUS_REQUEST_PATH: &str = "data/request.status.json";
const FULL_CONFIG_PATH: &str = "data/config.full.json";

struct DummyWrite {}

impl Write for DummyWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn dummy_writer(_: Option<File>) -> BufWriter<Box<dyn Write>> {
    BufWriter::new(Box::new(DummyWrite {}))
}

fn run_solve_with_args(args: &[&str]) -> Result<(), String> {
    let args = ["solve"].iter().chain(args.iter()).copied().collect::<Vec<_>>();
    let matches = get_solve_app().try_get_matches_from(args).map_err(|err| err.to_string())?;

    run_solve(&matches, dummy_writer)
}

#[test]
fn can_solve_stops_request_from_command_line() {
    let result = run_solve_with_args(&[STOPS_REQUEST_PATH, "-n", "20", "--seed", "1"]);

    assert_eq!(result, Ok(()));
}

#[test]
fn can_solve_status_request_with_config() {
    let result = run_solve_with_args(&[STATUS_REQUEST_PATH, "-c", FULL_CONFIG_PATH, "-n", "10", "-p", "1"]);

    assert_eq!(result, Ok(()));
}

#[test]
fn can_write_result_and_geojson_files() {
    let tmp_dir = TempDir::new().unwrap();
    let out_result = tmp_dir.path().join("result.json");
    let out_geojson = tmp_dir.path().join("route.geojson");
    let out_result_path = out_result.to_str().unwrap();
    let out_geojson_path = out_geojson.to_str().unwrap();

    let args = ["solve", STATUS_REQUEST_PATH, "-o", out_result_path, "-g", out_geojson_path, "-n", "10", "--seed", "3"];
    let matches = get_solve_app().try_get_matches_from(args).unwrap();

    run_solve(&matches, create_write_buffer).unwrap();

    let result: serde_json::Value = serde_json::from_reader(File::open(&out_result).unwrap()).unwrap();
    assert_eq!(result["route"][0], "DEPO");
    assert_eq!(result["route"][7], "TPA_SARIMUKTI");
    assert!(result.get("metrics").is_none());

    let geojson: serde_json::Value = serde_json::from_reader(File::open(&out_geojson).unwrap()).unwrap();
    assert_eq!(geojson["type"], "FeatureCollection");
    assert_eq!(geojson["features"].as_array().map(|features| features.len()), Some(9));
}

#[test]
fn can_return_error_json_for_invalid_request() {
    let tmp_dir = TempDir::new().unwrap();
    let request = tmp_dir.path().join("request.json");
    std::fs::write(&request, r#"{ "stops": [] }"#).unwrap();

    let err = run_solve_with_args(&[request.to_str().unwrap()]).err().unwrap();

    let errors: serde_json::Value = serde_json::from_str(err.as_str()).unwrap();
    assert_eq!(errors[0]["code"], "E1001");
}

#[test]
fn can_reject_invalid_arguments() {
    let cases: [(&[&str], &str); 4] = [
        (&["non_existing.json"], "cannot open request file 'non_existing.json'"),
        (&[STATUS_REQUEST_PATH, "-n", "many"], "cannot get integer value"),
        (&[STATUS_REQUEST_PATH, "-c", "non_existing.json"], "cannot open config file"),
        (&[STATUS_REQUEST_PATH, "-n", "0"], "invalid configuration"),
    ];

    cases.into_iter().for_each(|(args, expected)| {
        let err = run_solve_with_args(args).err().unwrap();

        assert!(err.contains(expected), "unexpected error: '{err}'");
    });
}
