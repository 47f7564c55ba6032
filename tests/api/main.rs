// all API tests are bundled into a single binary; linking is sequential, so
// one executable is much cheaper than one per file
mod feedback;
mod health_check;
mod modal;
