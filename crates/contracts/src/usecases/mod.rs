pub mod u501_customer_product_detail;
