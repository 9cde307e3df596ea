use serde::{Deserialize, Serialize};
use std::any::type_name;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, error};

pub fn dump_data_to_file<T: Serialize>(data: &T, file: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(file)?);
    bincode::serialize_into(&mut writer, data).map_err(|error| {
        error!("failed to serialize {} into {:?}", type_name::<T>(), file);
        io::Error::new(io::ErrorKind::Other, error)
    })?;
    debug!("wrote {} to {:?}", type_name::<T>(), file);
    writer.flush()
}

pub fn load_data_from_file<T: for<'a> Deserialize<'a>>(path: &Path) -> bincode::Result<T> {
    let reader = BufReader::new(File::open(path)?);
    bincode::deserialize_from(reader)
}
