pub mod carpal_tunnel_syndrome;
pub mod cervical_radiculopathy;
pub mod knee_osteoarthritis;
pub mod lumbar_disc_herniation;
pub mod lumbar_spinal_stenosis;
pub mod mechanical_low_back_pain;
pub mod plantar_fasciitis;
pub mod rotator_cuff_tendinopathy;
