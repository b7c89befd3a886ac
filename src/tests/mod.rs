mod eos_adiabatic;
mod tensors_dense;
